use syn::punctuated::Punctuated;
use syn::{LitStr, Path, Token};
use crate::interceptor::LogStrategy;
use crate::types::http::{ContentType, HttpMethod};

/// HTTP 处理器参数配置
pub struct HandlerArgs {
    pub url: LitStr,
    pub method: HttpMethod,
    pub content_type: Option<ContentType>,
    pub headers: Punctuated<LitStr, Token![,]>,
    pub interceptor: Option<Path>,
}

/// `#[retrofit_client]` 参数配置
pub struct RetrofitClientArgs {
    pub base_url: Option<LitStr>,
    /// 连接池名称，缺省使用 "default"
    pub pool: Option<LitStr>,
    pub interceptor: Option<Path>,
    pub log_level: Option<log::Level>,
    pub log_strategy: Option<LogStrategy>,
    pub timeout_ms: Option<u64>,
}
