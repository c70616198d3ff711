use std::sync::Arc;
use std::time::Duration;
use serde::Serialize;
use serde_json::Value;
use crate::error::RetrofitError;
use crate::interceptor::Interceptor;
use crate::types::{ContentType, HttpMethod};

/// 一次调用的请求描述
///
/// 由生成的方法逐步填充，真正的 `reqwest::Request` 在调用执行时才构建。
/// 填充过程中出现的第一个错误会被保留，执行时再返回给调用方。
pub struct RequestSpec {
    pub(crate) method: HttpMethod,
    pub(crate) url: String,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) body: Option<(ContentType, Value)>,
    pub(crate) interceptors: Vec<Arc<dyn Interceptor>>,
    pub(crate) timeout: Option<Duration>,
    pub(crate) error: Option<RetrofitError>,
}

impl RequestSpec {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
            interceptors: Vec::new(),
            timeout: None,
            error: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// 设置请求体，序列化失败时记录错误
    pub fn body<B: Serialize + ?Sized>(mut self, body: &B, content_type: ContentType) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => self.body = Some((content_type, value)),
            Err(e) => self.fail(RetrofitError::InvalidRequest(format!("failed to serialize body: {}", e))),
        }
        self
    }

    /// 追加方法级拦截器，排在客户端拦截器之后
    pub fn interceptor(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn fail(&mut self, error: RetrofitError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body_value(&self) -> Option<&(ContentType, Value)> {
        self.body.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_spec_collects_parts() {
        let spec = RequestSpec::new(HttpMethod::Post, "/api/test/savePerson")
            .header("X-Trace", "abc")
            .query("page", 2)
            .body(&json!({"id": 1}), ContentType::Json);

        assert_eq!(spec.method(), HttpMethod::Post);
        assert_eq!(spec.url(), "/api/test/savePerson");
        assert_eq!(spec.headers(), &[("X-Trace".to_string(), "abc".to_string())]);
        assert_eq!(spec.query_pairs(), &[("page".to_string(), "2".to_string())]);
        assert_eq!(spec.body_value().unwrap().1, json!({"id": 1}));
        assert!(spec.error.is_none());
    }

    #[test]
    fn test_first_error_is_kept() {
        // 非字符串键的 map 无法序列化为 JSON
        let bad: HashMap<(i32, i32), i32> = HashMap::from([((1, 2), 3)]);
        let spec = RequestSpec::new(HttpMethod::Post, "/x")
            .body(&bad, ContentType::Json)
            .body(&json!({"ok": true}), ContentType::Json);

        assert!(matches!(spec.error, Some(RetrofitError::InvalidRequest(_))));
        assert_eq!(spec.body_value().unwrap().1, json!({"ok": true}));
    }
}
