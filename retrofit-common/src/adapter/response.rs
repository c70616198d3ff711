use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Url};
use crate::error::RetrofitError;
use crate::types::RawResponse;

/// 带状态码和头部的响应包装
///
/// 成功（2xx）时携带解码后的响应体，否则保留原始错误响应体。
#[derive(Debug)]
pub struct Response<T> {
    status: StatusCode,
    headers: HeaderMap,
    url: Url,
    body: Option<T>,
    error_body: Option<Bytes>,
}

impl<T> Response<T> {
    pub fn new(raw: RawResponse, body: Option<T>) -> Self {
        let error_body = if raw.is_successful() {
            None
        } else {
            Some(raw.body().clone())
        };
        Self {
            status: raw.status(),
            headers: raw.headers().clone(),
            url: raw.url().clone(),
            body,
            error_body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn is_successful(&self) -> bool {
        self.status.is_success()
    }

    pub fn body(&self) -> Option<&T> {
        self.body.as_ref()
    }

    pub fn error_body(&self) -> Option<&Bytes> {
        self.error_body.as_ref()
    }

    /// 取出响应体，非 2xx 响应返回 `RetrofitError::Http`
    pub fn into_body(self) -> anyhow::Result<T> {
        match self.body {
            Some(body) => Ok(body),
            None => {
                let detail = self
                    .error_body
                    .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                    .unwrap_or_default();
                Err(RetrofitError::Http {
                    status: self.status,
                    message: format!("{} {} returned no body: {}", self.status, self.url, detail),
                }
                .into())
            }
        }
    }
}
