use async_trait::async_trait;
use crate::types::RawResponse;

/// retrofit-rs 拦截器接口
///
/// 每次请求都会依次经过拦截器链：
/// - `before_request` 按链路顺序调用，可以改写即将发出的请求
/// - `after_response` 按相反顺序调用，可以检查或替换已缓冲的响应
///
/// 拦截器会被多个并发请求同时调用，实现者应把自身配置视为只读，
/// 需要可变状态时自行加锁。
#[async_trait]
pub trait Interceptor: Send + Sync {
    /// 请求前处理
    async fn before_request(&self, request: reqwest::Request) -> anyhow::Result<reqwest::Request> {
        Ok(request)
    }

    /// 响应后处理
    ///
    /// # 参数
    /// - `request`: 实际发出的请求（副本）
    /// - `response`: 已缓冲的响应
    async fn after_response(
        &self,
        request: &reqwest::Request,
        response: RawResponse,
    ) -> anyhow::Result<RawResponse>;
}

/// 全局拦截器
///
/// 注册到 `ExtensionRegistry` 后作用于所有客户端的每一次调用。
pub trait GlobalInterceptor: Interceptor {}

/// 空拦截器实现，用于测试和默认情况
#[derive(Default)]
pub struct NoOpInterceptor;

#[async_trait]
impl Interceptor for NoOpInterceptor {
    async fn after_response(
        &self,
        _request: &reqwest::Request,
        response: RawResponse,
    ) -> anyhow::Result<RawResponse> {
        Ok(response)
    }
}
