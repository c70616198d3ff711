pub mod builder;
pub mod cache_interceptor;
pub mod dynamic_params;

pub use builder::RequestBuilder;
pub use cache_interceptor::CachedInterceptorProcessor;
pub use dynamic_params::DynamicParamsProcessor;
