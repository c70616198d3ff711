use std::collections::HashMap;
use std::sync::Arc;
use crate::adapter::{CallAdapterFactory, ReturnKind};
use crate::converter::ConverterFactory;
use crate::error::RetrofitError;
use crate::interceptor::{
    DefaultHttpExceptionMessageFormatter, HttpExceptionMessageFormatterInterceptor, Interceptor,
};
use crate::pool::ConnectionPool;
use crate::registry::LoggingInterceptorFactory;
use super::RetrofitProperties;

/// retrofit-rs 的全局配置对象
///
/// 由 `RetrofitAutoConfiguration` 在启动时组装，之后以 `Arc` 共享给所有客户端，只读。
pub struct RetrofitConfigBean {
    properties: RetrofitProperties,
    http_exception_message_formatter_interceptor: Arc<HttpExceptionMessageFormatterInterceptor>,
    call_adapter_factories: Vec<Arc<dyn CallAdapterFactory>>,
    converter_factories: Vec<Arc<dyn ConverterFactory>>,
    pool_registry: HashMap<String, ConnectionPool>,
    global_interceptors: Vec<Arc<dyn Interceptor>>,
    logging_interceptor_factory: Option<LoggingInterceptorFactory>,
}

impl RetrofitConfigBean {
    pub fn new(properties: RetrofitProperties) -> Self {
        Self {
            properties,
            http_exception_message_formatter_interceptor: Arc::new(
                HttpExceptionMessageFormatterInterceptor::new(Arc::new(DefaultHttpExceptionMessageFormatter)),
            ),
            call_adapter_factories: Vec::new(),
            converter_factories: Vec::new(),
            pool_registry: HashMap::new(),
            global_interceptors: Vec::new(),
            logging_interceptor_factory: None,
        }
    }

    pub fn properties(&self) -> &RetrofitProperties {
        &self.properties
    }

    pub fn set_properties(&mut self, properties: RetrofitProperties) {
        self.properties = properties;
    }

    pub fn http_exception_message_formatter_interceptor(&self) -> &Arc<HttpExceptionMessageFormatterInterceptor> {
        &self.http_exception_message_formatter_interceptor
    }

    pub fn set_http_exception_message_formatter_interceptor(
        &mut self,
        interceptor: Arc<HttpExceptionMessageFormatterInterceptor>,
    ) {
        self.http_exception_message_formatter_interceptor = interceptor;
    }

    pub fn call_adapter_factories(&self) -> &[Arc<dyn CallAdapterFactory>] {
        &self.call_adapter_factories
    }

    pub fn set_call_adapter_factories(&mut self, factories: Vec<Arc<dyn CallAdapterFactory>>) {
        self.call_adapter_factories = factories;
    }

    pub fn converter_factories(&self) -> &[Arc<dyn ConverterFactory>] {
        &self.converter_factories
    }

    pub fn set_converter_factories(&mut self, factories: Vec<Arc<dyn ConverterFactory>>) {
        self.converter_factories = factories;
    }

    pub fn pool_registry(&self) -> &HashMap<String, ConnectionPool> {
        &self.pool_registry
    }

    pub fn set_pool_registry(&mut self, pool_registry: HashMap<String, ConnectionPool>) {
        self.pool_registry = pool_registry;
    }

    pub fn global_interceptors(&self) -> &[Arc<dyn Interceptor>] {
        &self.global_interceptors
    }

    pub fn set_global_interceptors(&mut self, interceptors: Vec<Arc<dyn Interceptor>>) {
        self.global_interceptors = interceptors;
    }

    pub fn logging_interceptor_factory(&self) -> Option<&LoggingInterceptorFactory> {
        self.logging_interceptor_factory.as_ref()
    }

    pub fn set_logging_interceptor_factory(&mut self, factory: Option<LoggingInterceptorFactory>) {
        self.logging_interceptor_factory = factory;
    }

    /// 按名称查找连接池
    pub fn pool(&self, name: &str) -> Result<&ConnectionPool, RetrofitError> {
        self.pool_registry
            .get(name)
            .ok_or_else(|| RetrofitError::UnknownPool(name.to_string()))
    }

    /// 查找能处理该返回形态的第一个调用适配器
    pub fn call_adapter_factory(&self, kind: ReturnKind) -> Result<&Arc<dyn CallAdapterFactory>, RetrofitError> {
        if kind == ReturnKind::Unit && self.properties.disable_void_return_type {
            return Err(RetrofitError::VoidReturnTypeDisabled);
        }
        self.call_adapter_factories
            .iter()
            .find(|factory| factory.supports(kind))
            .ok_or(RetrofitError::NoCallAdapter(kind))
    }

    /// 查找响应体转换器，`media_type` 为 `None` 表示响应没有 Content-Type
    pub fn response_converter(&self, media_type: Option<&str>) -> Result<&Arc<dyn ConverterFactory>, RetrofitError> {
        self.converter_factories
            .iter()
            .find(|factory| factory.supports(media_type))
            .ok_or_else(|| RetrofitError::NoConverter(media_type.unwrap_or("<none>").to_string()))
    }

    /// 查找请求体转换器
    pub fn request_converter(&self, media_type: &str) -> Result<&Arc<dyn ConverterFactory>, RetrofitError> {
        self.response_converter(Some(media_type))
    }
}
