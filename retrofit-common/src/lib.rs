//! retrofit-rs 公共库
//!
//! 包含配置属性、全局配置对象与自动装配、命名连接池、拦截器、调用适配器、
//! 转换器和运行时客户端，以及 `retrofit-macro` 使用的宏参数类型与解析器。

pub mod adapter;
pub mod client;
pub mod config;
pub mod converter;
pub mod error;
pub mod interceptor;
pub mod parsing;
pub mod pool;
pub mod registry;
pub mod types;

pub use adapter::{
    BodyCallAdapterFactory, Call, CallAdapterFactory, Callback, DefaultCallAdapterFactory, Response,
    ResponseCallAdapterFactory, ReturnKind,
};
pub use client::{RequestSpec, RetrofitClient, RetrofitClientBuilder};
pub use config::{PoolConfig, RetrofitAutoConfiguration, RetrofitConfigBean, RetrofitProperties};
pub use converter::{
    ConverterFactory, FormUrlEncodedConverterFactory, JsonConverterFactory, ScalarsConverterFactory,
};
pub use error::RetrofitError;
pub use interceptor::{
    DefaultHttpExceptionMessageFormatter, DefaultLoggingInterceptor, GlobalInterceptor,
    HttpExceptionMessageFormatter, HttpExceptionMessageFormatterInterceptor, Interceptor,
    InterceptorCache, LogStrategy, LoggingInterceptor, LoggingSettings, NoOpInterceptor,
};
pub use parsing::{parse_handler_args, parse_retrofit_client_args};
pub use pool::ConnectionPool;
pub use registry::{ExtensionRegistry, LoggingInterceptorFactory};
pub use types::{ContentType, HandlerArgs, HttpMethod, RawResponse, RetrofitClientArgs};

/// 生成代码引用日志级别时使用的别名
pub use log::Level as LogLevel;
