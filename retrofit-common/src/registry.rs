use std::collections::HashMap;
use std::sync::Arc;
use crate::adapter::CallAdapterFactory;
use crate::converter::ConverterFactory;
use crate::error::RetrofitError;
use crate::interceptor::{
    DefaultHttpExceptionMessageFormatter, DefaultLoggingInterceptor, GlobalInterceptor,
    HttpExceptionMessageFormatter, Interceptor, LogStrategy, LoggingInterceptor,
};

/// 内置扩展的注册名称
pub const DEFAULT_EXTENSION_NAME: &str = "default";

/// 按日志级别和策略创建日志拦截器
pub type LoggingInterceptorFactory =
    Arc<dyn Fn(log::Level, LogStrategy) -> Arc<dyn Interceptor> + Send + Sync>;

type MessageFormatterFactory = Arc<dyn Fn() -> Arc<dyn HttpExceptionMessageFormatter> + Send + Sync>;

/// 扩展注册表
///
/// 配置文件中的 `logging-interceptor-class` 与 `http-exception-message-formatter-class`
/// 按名称在这里查找构造函数。全局拦截器、额外的调用适配器和转换器也在这里登记，
/// 由 `RetrofitAutoConfiguration` 装配进配置对象。
#[derive(Clone)]
pub struct ExtensionRegistry {
    logging_interceptors: HashMap<String, LoggingInterceptorFactory>,
    message_formatters: HashMap<String, MessageFormatterFactory>,
    global_interceptors: Vec<Arc<dyn Interceptor>>,
    call_adapter_factories: Vec<Arc<dyn CallAdapterFactory>>,
    converter_factories: Vec<Arc<dyn ConverterFactory>>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self {
            logging_interceptors: HashMap::new(),
            message_formatters: HashMap::new(),
            global_interceptors: Vec::new(),
            call_adapter_factories: Vec::new(),
            converter_factories: Vec::new(),
        }
        .register_logging_interceptor(DEFAULT_EXTENSION_NAME, DefaultLoggingInterceptor::new)
        .register_message_formatter(DEFAULT_EXTENSION_NAME, || DefaultHttpExceptionMessageFormatter)
    }

    /// 注册日志拦截器构造函数，同名注册会覆盖之前的实现
    pub fn register_logging_interceptor<T, F>(mut self, name: impl Into<String>, constructor: F) -> Self
    where
        T: LoggingInterceptor + 'static,
        F: Fn(log::Level, LogStrategy) -> T + Send + Sync + 'static,
    {
        let factory: LoggingInterceptorFactory =
            Arc::new(move |level: log::Level, strategy: LogStrategy| {
                Arc::new(constructor(level, strategy)) as Arc<dyn Interceptor>
            });
        self.logging_interceptors.insert(name.into(), factory);
        self
    }

    /// 注册 Http 异常信息格式化器
    pub fn register_message_formatter<T, F>(mut self, name: impl Into<String>, constructor: F) -> Self
    where
        T: HttpExceptionMessageFormatter + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let factory: MessageFormatterFactory =
            Arc::new(move || Arc::new(constructor()) as Arc<dyn HttpExceptionMessageFormatter>);
        self.message_formatters.insert(name.into(), factory);
        self
    }

    /// 注册全局拦截器，按注册顺序执行
    pub fn register_global_interceptor<T>(mut self, interceptor: T) -> Self
    where
        T: GlobalInterceptor + 'static,
    {
        self.global_interceptors.push(Arc::new(interceptor));
        self
    }

    /// 追加调用适配器，排在内置适配器之前
    pub fn add_call_adapter_factory(mut self, factory: impl CallAdapterFactory + 'static) -> Self {
        self.call_adapter_factories.push(Arc::new(factory));
        self
    }

    /// 追加转换器，排在内置转换器之前
    pub fn add_converter_factory(mut self, factory: impl ConverterFactory + 'static) -> Self {
        self.converter_factories.push(Arc::new(factory));
        self
    }

    pub fn logging_interceptor(&self, name: &str) -> Result<LoggingInterceptorFactory, RetrofitError> {
        self.logging_interceptors
            .get(name)
            .cloned()
            .ok_or_else(|| RetrofitError::UnknownExtension {
                kind: "logging interceptor",
                name: name.to_string(),
            })
    }

    pub fn message_formatter(&self, name: &str) -> Result<Arc<dyn HttpExceptionMessageFormatter>, RetrofitError> {
        self.message_formatters
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| RetrofitError::UnknownExtension {
                kind: "http exception message formatter",
                name: name.to_string(),
            })
    }

    pub fn global_interceptors(&self) -> &[Arc<dyn Interceptor>] {
        &self.global_interceptors
    }

    pub fn call_adapter_factories(&self) -> &[Arc<dyn CallAdapterFactory>] {
        &self.call_adapter_factories
    }

    pub fn converter_factories(&self) -> &[Arc<dyn ConverterFactory>] {
        &self.converter_factories
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
