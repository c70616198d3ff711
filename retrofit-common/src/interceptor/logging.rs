use std::fmt;
use std::str::FromStr;
use async_trait::async_trait;
use proc_macro2::TokenStream;
use quote::quote;
use serde::{Deserialize, Serialize};
use crate::interceptor::Interceptor;
use crate::types::RawResponse;

/// 日志打印策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum LogStrategy {
    /// 不打印日志
    None,
    /// 只打印请求行和响应行
    #[default]
    Basic,
    /// 打印请求行、响应行以及各自的头部
    Headers,
    /// 打印请求行、响应行、头部以及请求体/响应体
    Body,
}

impl LogStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogStrategy::None => "none",
            LogStrategy::Basic => "basic",
            LogStrategy::Headers => "headers",
            LogStrategy::Body => "body",
        }
    }

    pub fn logs_headers(&self) -> bool {
        matches!(self, LogStrategy::Headers | LogStrategy::Body)
    }

    pub fn logs_body(&self) -> bool {
        matches!(self, LogStrategy::Body)
    }

    /// 生成代码中引用该变体的路径
    pub fn to_path_tokens(&self) -> TokenStream {
        match self {
            LogStrategy::None => quote! { retrofit_common::LogStrategy::None },
            LogStrategy::Basic => quote! { retrofit_common::LogStrategy::Basic },
            LogStrategy::Headers => quote! { retrofit_common::LogStrategy::Headers },
            LogStrategy::Body => quote! { retrofit_common::LogStrategy::Body },
        }
    }
}

impl FromStr for LogStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(LogStrategy::None),
            "basic" => Ok(LogStrategy::Basic),
            "headers" => Ok(LogStrategy::Headers),
            "body" => Ok(LogStrategy::Body),
            _ => Err(format!("unknown log strategy: {}", s)),
        }
    }
}

impl TryFrom<String> for LogStrategy {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for LogStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 日志拦截器的基础配置：打印级别 + 打印策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingSettings {
    pub level: log::Level,
    pub strategy: LogStrategy,
}

impl LoggingSettings {
    pub fn new(level: log::Level, strategy: LogStrategy) -> Self {
        Self { level, strategy }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self::new(log::Level::Info, LogStrategy::Basic)
    }
}

/// 日志打印拦截器
///
/// 通过 `ExtensionRegistry::register_logging_interceptor` 注册自定义实现，
/// 并在配置中以 `retrofit.logging-interceptor-class` 引用其名称。
pub trait LoggingInterceptor: Interceptor {
    fn settings(&self) -> &LoggingSettings;

    fn log_level(&self) -> log::Level {
        self.settings().level
    }

    fn log_strategy(&self) -> LogStrategy {
        self.settings().strategy
    }
}

/// 默认日志拦截器，输出格式与 OkHttp 的 HttpLoggingInterceptor 保持一致
pub struct DefaultLoggingInterceptor {
    settings: LoggingSettings,
}

impl DefaultLoggingInterceptor {
    pub fn new(level: log::Level, strategy: LogStrategy) -> Self {
        Self {
            settings: LoggingSettings::new(level, strategy),
        }
    }

    fn enabled(&self) -> bool {
        self.settings.strategy != LogStrategy::None && log::log_enabled!(self.settings.level)
    }

    fn emit(&self, lines: &[String]) {
        for line in lines {
            log::log!(self.settings.level, "{}", line);
        }
    }

    /// 渲染请求日志行
    pub fn request_lines(&self, request: &reqwest::Request) -> Vec<String> {
        let strategy = self.settings.strategy;
        let mut lines = Vec::new();
        if strategy == LogStrategy::None {
            return lines;
        }

        let method = request.method();
        let body = request.body().and_then(|body| body.as_bytes());

        if !strategy.logs_headers() {
            let size = body.map(|b| format!(" ({}-byte body)", b.len())).unwrap_or_default();
            lines.push(format!("--> {} {}{}", method, request.url(), size));
            return lines;
        }

        lines.push(format!("--> {} {}", method, request.url()));
        for (name, value) in request.headers() {
            lines.push(format!("{}: {}", name, value.to_str().unwrap_or("<binary>")));
        }

        match body {
            Some(bytes) if strategy.logs_body() => {
                lines.push(String::new());
                lines.push(render_body(bytes));
                lines.push(format!("--> END {} ({}-byte body)", method, bytes.len()));
            }
            _ => lines.push(format!("--> END {}", method)),
        }
        lines
    }

    /// 渲染响应日志行
    pub fn response_lines(&self, response: &RawResponse) -> Vec<String> {
        let strategy = self.settings.strategy;
        let mut lines = Vec::new();
        if strategy == LogStrategy::None {
            return lines;
        }

        let size = response.body().len();
        if !strategy.logs_headers() {
            lines.push(format!("<-- {} {} ({}-byte body)", response.status(), response.url(), size));
            return lines;
        }

        lines.push(format!("<-- {} {}", response.status(), response.url()));
        for (name, value) in response.headers() {
            lines.push(format!("{}: {}", name, value.to_str().unwrap_or("<binary>")));
        }

        if strategy.logs_body() {
            lines.push(String::new());
            lines.push(render_body(response.body()));
            lines.push(format!("<-- END HTTP ({}-byte body)", size));
        } else {
            lines.push("<-- END HTTP".to_string());
        }
        lines
    }
}

fn render_body(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => format!("(binary {}-byte body omitted)", bytes.len()),
    }
}

#[async_trait]
impl Interceptor for DefaultLoggingInterceptor {
    async fn before_request(&self, request: reqwest::Request) -> anyhow::Result<reqwest::Request> {
        if self.enabled() {
            self.emit(&self.request_lines(&request));
        }
        Ok(request)
    }

    async fn after_response(
        &self,
        _request: &reqwest::Request,
        response: RawResponse,
    ) -> anyhow::Result<RawResponse> {
        if self.enabled() {
            self.emit(&self.response_lines(&response));
        }
        Ok(response)
    }
}

impl LoggingInterceptor for DefaultLoggingInterceptor {
    fn settings(&self) -> &LoggingSettings {
        &self.settings
    }
}
