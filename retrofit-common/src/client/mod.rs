//! 运行时客户端
//!
//! 生成的接口方法最终都落到 `RetrofitClient::call`：
//! 检查调用适配器 -> 构建请求（转换器编码请求体）-> 拦截器链 `before_request`
//! -> 发送 -> 缓冲响应 -> 拦截器链 `after_response`（逆序）。

pub mod builder;
pub mod request;

pub use builder::RetrofitClientBuilder;
pub use request::RequestSpec;

use std::sync::{Arc, Mutex};
use std::time::Duration;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use serde::de::DeserializeOwned;
use crate::adapter::ReturnKind;
use crate::config::RetrofitConfigBean;
use crate::error::RetrofitError;
use crate::interceptor::{Interceptor, InterceptorCache};
use crate::types::{HttpMethod, RawResponse};

/// 由 `#[retrofit_client]` 生成的结构体持有的运行时核心
///
/// 克隆代价很低：配置、连接池和拦截器都以 `Arc` 共享。
#[derive(Clone)]
pub struct RetrofitClient {
    config: Arc<RetrofitConfigBean>,
    http: reqwest::Client,
    base_url: String,
    /// 全局拦截器 + 客户端拦截器
    interceptors: Vec<Arc<dyn Interceptor>>,
    logging: Option<Arc<dyn Interceptor>>,
    method_interceptors: Arc<Mutex<InterceptorCache>>,
    timeout: Option<Duration>,
}

impl RetrofitClient {
    pub fn builder(config: Arc<RetrofitConfigBean>) -> RetrofitClientBuilder {
        RetrofitClientBuilder::new(config)
    }

    pub fn config(&self) -> &Arc<RetrofitConfigBean> {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn new_request(&self, method: HttpMethod, url: impl Into<String>) -> RequestSpec {
        RequestSpec::new(method, url)
    }

    /// 获取（必要时创建）方法级拦截器
    pub fn method_interceptor<T>(&self) -> Arc<dyn Interceptor>
    where
        T: Interceptor + Default + 'static,
    {
        let mut cache = self
            .method_interceptors
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        cache.get_or_create::<T>()
    }

    /// 把相对地址拼接到 base url 上，完整的 http(s) 地址原样使用
    pub fn resolve_url(&self, url: &str) -> Result<Url, RetrofitError> {
        if let Ok(absolute) = Url::parse(url) {
            if matches!(absolute.scheme(), "http" | "https") {
                return Ok(absolute);
            }
        }

        let full = if self.base_url.is_empty() {
            return Err(RetrofitError::MissingBaseUrl(url.to_string()));
        } else {
            format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                url.trim_start_matches('/')
            )
        };

        Url::parse(&full).map_err(|e| RetrofitError::InvalidUrl {
            url: full.clone(),
            reason: e.to_string(),
        })
    }

    /// 执行一次调用，返回经过拦截器链处理后的响应
    pub async fn call(&self, spec: RequestSpec, kind: ReturnKind) -> anyhow::Result<RawResponse> {
        self.config.call_adapter_factory(kind)?;

        let (request, method_interceptors) = self.build_request(spec)?;
        let chain = self.chain(method_interceptors);

        let mut request = request;
        for interceptor in &chain {
            request = interceptor.before_request(request).await?;
        }

        let snapshot = request.try_clone().ok_or_else(|| {
            RetrofitError::InvalidRequest("streaming request bodies are not supported".to_string())
        })?;

        let response = self.http.execute(request).await.map_err(RetrofitError::from)?;
        let mut response = RawResponse::read(response).await.map_err(RetrofitError::from)?;

        for interceptor in chain.iter().rev() {
            response = interceptor.after_response(&snapshot, response).await?;
        }
        Ok(response)
    }

    /// 按响应的 Content-Type 选择转换器并解码
    pub fn decode<T: DeserializeOwned>(&self, response: &RawResponse) -> anyhow::Result<T> {
        let media_type = response.media_type();
        let converter = self.config.response_converter(media_type.as_deref())?;
        let value = converter.decode(response.body())?;
        Ok(serde_json::from_value(value)?)
    }

    fn build_request(
        &self,
        spec: RequestSpec,
    ) -> Result<(reqwest::Request, Vec<Arc<dyn Interceptor>>), RetrofitError> {
        let RequestSpec {
            method,
            url,
            headers,
            query,
            body,
            interceptors,
            timeout,
            error,
        } = spec;

        if let Some(error) = error {
            return Err(error);
        }

        let url = self.resolve_url(&url)?;
        let mut builder = self.http.request(method.to_reqwest(), url);

        if !query.is_empty() {
            builder = builder.query(&query);
        }
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some((content_type, value)) = body {
            let media_type = content_type.media_type();
            let bytes = self
                .config
                .request_converter(media_type)?
                .encode(&value)
                .map_err(|e| RetrofitError::InvalidRequest(e.to_string()))?;
            builder = builder.header(CONTENT_TYPE, media_type).body(bytes);
        }

        if let Some(timeout) = timeout.or(self.timeout) {
            builder = builder.timeout(timeout);
        }

        Ok((builder.build()?, interceptors))
    }

    /// 全局 -> 客户端 -> 方法 -> 异常信息格式化 -> 日志
    fn chain(&self, method_interceptors: Vec<Arc<dyn Interceptor>>) -> Vec<Arc<dyn Interceptor>> {
        let mut chain = self.interceptors.clone();
        chain.extend(method_interceptors);
        chain.push(self.config.http_exception_message_formatter_interceptor().clone());
        chain.extend(self.logging.clone());
        chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RetrofitAutoConfiguration, RetrofitProperties};
    use crate::interceptor::NoOpInterceptor;
    use crate::types::ContentType;

    fn client(base_url: &str) -> RetrofitClient {
        let config = RetrofitAutoConfiguration::new(RetrofitProperties::default())
            .build()
            .unwrap();
        RetrofitClient::builder(config).base_url(base_url).build().unwrap()
    }

    #[test]
    fn test_resolve_relative_url() {
        let client = client("http://localhost:8080/");
        assert_eq!(
            client.resolve_url("/api/test/person").unwrap().as_str(),
            "http://localhost:8080/api/test/person"
        );
        assert_eq!(
            client.resolve_url("api/test/person").unwrap().as_str(),
            "http://localhost:8080/api/test/person"
        );
    }

    #[test]
    fn test_absolute_url_bypasses_base_url() {
        let client = client("");
        assert_eq!(
            client.resolve_url("https://example.com/api/ping").unwrap().as_str(),
            "https://example.com/api/ping"
        );
        assert!(matches!(
            client.resolve_url("/api/ping"),
            Err(RetrofitError::MissingBaseUrl(_))
        ));
    }

    #[test]
    fn test_absolute_url_scheme_is_case_insensitive() {
        let client = client("http://localhost:8080/");
        assert_eq!(
            client.resolve_url("HTTP://example.com/api/ping").unwrap().as_str(),
            "http://example.com/api/ping"
        );
        assert_eq!(
            client.resolve_url("Https://example.com/x").unwrap().as_str(),
            "https://example.com/x"
        );
    }

    #[test]
    fn test_unknown_pool_fails_build() {
        let config = RetrofitAutoConfiguration::new(RetrofitProperties::default())
            .build()
            .unwrap();
        let error = RetrofitClient::builder(config).pool("test1").build().err().unwrap();
        assert!(matches!(error, RetrofitError::UnknownPool(_)));
    }

    #[test]
    fn test_build_request_encodes_body_and_query() {
        let client = client("http://localhost:8080");
        let spec = client
            .new_request(HttpMethod::Post, "/api/test/savePerson")
            .query("dryRun", true)
            .header("X-Trace", "abc")
            .body(&serde_json::json!({"name": "test", "age": 10}), ContentType::FormUrlEncoded);

        let (request, interceptors) = client.build_request(spec).unwrap();

        assert!(interceptors.is_empty());
        assert_eq!(request.url().as_str(), "http://localhost:8080/api/test/savePerson?dryRun=true");
        assert_eq!(request.headers()["x-trace"], "abc");
        assert_eq!(request.headers()[CONTENT_TYPE], "application/x-www-form-urlencoded");
        assert_eq!(request.body().and_then(|b| b.as_bytes()), Some(&b"age=10&name=test"[..]));
    }

    #[test]
    fn test_chain_order() {
        let client = client("http://localhost:8080");
        let method: Arc<dyn Interceptor> = Arc::new(NoOpInterceptor);
        let chain = client.chain(vec![method.clone()]);

        // 方法拦截器 -> 异常信息格式化 -> 日志
        assert_eq!(chain.len(), 3);
        assert!(Arc::ptr_eq(&chain[0], &method));
    }

    #[test]
    fn test_method_interceptor_is_cached() {
        let client = client("http://localhost:8080");
        let first = client.method_interceptor::<NoOpInterceptor>();
        let second = client.clone().method_interceptor::<NoOpInterceptor>();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
