use std::sync::Arc;
use async_trait::async_trait;
use crate::error::RetrofitError;
use crate::interceptor::Interceptor;
use crate::types::RawResponse;

/// 响应体在错误信息中最多保留的字符数
const MAX_BODY_CHARS: usize = 1024;

/// Http 异常信息格式化器
pub trait HttpExceptionMessageFormatter: Send + Sync {
    fn format(&self, request: &reqwest::Request, response: &RawResponse) -> String;
}

#[derive(Debug, Default)]
pub struct DefaultHttpExceptionMessageFormatter;

impl HttpExceptionMessageFormatter for DefaultHttpExceptionMessageFormatter {
    fn format(&self, request: &reqwest::Request, response: &RawResponse) -> String {
        let body = response.text();
        let body = match body.char_indices().nth(MAX_BODY_CHARS) {
            Some((cut, _)) => format!("{}...", &body[..cut]),
            None => body,
        };
        format!(
            "HTTP request failed: {} {} -> {}, body: {}",
            request.method(),
            request.url(),
            response.status(),
            body
        )
    }
}

/// 把非 2xx 响应转换为 `RetrofitError::Http` 的拦截器
pub struct HttpExceptionMessageFormatterInterceptor {
    formatter: Arc<dyn HttpExceptionMessageFormatter>,
}

impl HttpExceptionMessageFormatterInterceptor {
    pub fn new(formatter: Arc<dyn HttpExceptionMessageFormatter>) -> Self {
        Self { formatter }
    }
}

#[async_trait]
impl Interceptor for HttpExceptionMessageFormatterInterceptor {
    async fn after_response(
        &self,
        request: &reqwest::Request,
        response: RawResponse,
    ) -> anyhow::Result<RawResponse> {
        if response.is_successful() {
            return Ok(response);
        }
        let message = self.formatter.format(request, &response);
        Err(RetrofitError::Http {
            status: response.status(),
            message,
        }
        .into())
    }
}
