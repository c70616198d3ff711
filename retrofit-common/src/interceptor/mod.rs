pub mod traits;
pub mod cache;
pub mod logging;
pub mod error_format;

pub use traits::{Interceptor, GlobalInterceptor, NoOpInterceptor};
pub use cache::InterceptorCache;
pub use logging::{LogStrategy, LoggingSettings, LoggingInterceptor, DefaultLoggingInterceptor};
pub use error_format::{
    HttpExceptionMessageFormatter, DefaultHttpExceptionMessageFormatter,
    HttpExceptionMessageFormatterInterceptor,
};
