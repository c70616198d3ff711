use crate::adapter::ReturnKind;
use reqwest::StatusCode;

/// retrofit-rs 自身的错误类型
///
/// 生成的客户端方法统一返回 `anyhow::Result`，调用方可以通过
/// `downcast_ref::<RetrofitError>()` 取回具体原因。
#[derive(Debug, thiserror::Error)]
pub enum RetrofitError {
    #[error("no connection pool named '{0}' is configured")]
    UnknownPool(String),

    #[error("no {kind} registered under the name '{name}'")]
    UnknownExtension { kind: &'static str, name: String },

    #[error("no call adapter can handle the {0} return type")]
    NoCallAdapter(ReturnKind),

    #[error("retrofit.disable-void-return-type=true does not allow methods returning ()")]
    VoidReturnTypeDisabled,

    #[error("no converter can handle media type '{0}'")]
    NoConverter(String),

    #[error("cannot resolve relative url '{0}' without a base url")]
    MissingBaseUrl(String),

    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("{message}")]
    Http { status: StatusCode, message: String },

    #[error("failed to load retrofit properties: {0}")]
    Config(String),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl RetrofitError {
    /// HTTP 错误对应的状态码
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RetrofitError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
