use bytes::Bytes;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{StatusCode, Url};

/// 已读取完毕的 HTTP 响应
///
/// 响应体在进入拦截器链之前被完整缓冲，因此拦截器可以自由读取
/// 响应体（例如日志打印），而不会消耗掉后续解码所需的数据。
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    url: Url,
    body: Bytes,
}

impl RawResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, url: Url, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            url,
            body: body.into(),
        }
    }

    /// 读取 reqwest 响应的全部内容
    pub async fn read(response: reqwest::Response) -> Result<Self, reqwest::Error> {
        let status = response.status();
        let headers = response.headers().clone();
        let url = response.url().clone();
        let body = response.bytes().await?;
        Ok(Self::new(status, headers, url, body))
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

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// 状态码是否为 2xx
    pub fn is_successful(&self) -> bool {
        self.status.is_success()
    }

    /// 去掉参数部分的 Content-Type，例如 `application/json; charset=utf-8` -> `application/json`
    pub fn media_type(&self) -> Option<String> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| {
                value
                    .split(';')
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_ascii_lowercase()
            })
            .filter(|value| !value.is_empty())
    }

    /// 以 UTF-8 读取响应体，非法字节会被替换
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// 替换响应体，保留状态码和头部
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }
}
