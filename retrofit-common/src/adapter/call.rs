use tokio::task::JoinHandle;
use crate::adapter::{Response, ReturnKind};
use crate::client::{RequestSpec, RetrofitClient};
use crate::types::RawResponse;

type Converter<T> = Box<dyn FnOnce(&RetrofitClient, &RawResponse) -> anyhow::Result<T> + Send>;

/// 异步回调
pub trait Callback<T>: Send + 'static {
    fn on_response(self, response: Response<T>);

    fn on_failure(self, error: anyhow::Error);
}

/// 延迟执行的调用
///
/// 方法声明为返回 `Call<T>` 时，生成的代码只描述请求而不发送；
/// 调用方可以选择 `execute` 等待结果、`enqueue` 交给后台任务并通过回调接收结果，
/// 或者 `spawn` 立即开始执行并拿到一个可等待的句柄。
pub struct Call<T> {
    client: RetrofitClient,
    spec: RequestSpec,
    converter: Converter<T>,
}

impl<T: Send + 'static> Call<T> {
    pub fn new<F>(client: RetrofitClient, spec: RequestSpec, converter: F) -> Self
    where
        F: FnOnce(&RetrofitClient, &RawResponse) -> anyhow::Result<T> + Send + 'static,
    {
        Self {
            client,
            spec,
            converter: Box::new(converter),
        }
    }

    /// 尚未发送的请求描述
    pub fn request(&self) -> &RequestSpec {
        &self.spec
    }

    /// 发送请求并等待响应
    pub async fn execute(self) -> anyhow::Result<Response<T>> {
        let Call { client, spec, converter } = self;
        let raw = client.call(spec, ReturnKind::Call).await?;
        let body = if raw.is_successful() {
            Some(converter(&client, &raw)?)
        } else {
            None
        };
        Ok(Response::new(raw, body))
    }

    /// 在后台任务中执行，完成后调用回调
    pub fn enqueue<C>(self, callback: C) -> JoinHandle<()>
    where
        C: Callback<T>,
    {
        tokio::spawn(async move {
            match self.execute().await {
                Ok(response) => callback.on_response(response),
                Err(error) => callback.on_failure(error),
            }
        })
    }

    /// 立即开始执行，返回响应体的句柄
    pub fn spawn(self) -> JoinHandle<anyhow::Result<T>> {
        tokio::spawn(async move { self.execute().await?.into_body() })
    }
}
