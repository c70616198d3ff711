use std::collections::HashMap;
use std::sync::Arc;
use crate::adapter::{
    BodyCallAdapterFactory, CallAdapterFactory, DefaultCallAdapterFactory, ResponseCallAdapterFactory,
};
use crate::converter::{
    ConverterFactory, FormUrlEncodedConverterFactory, JsonConverterFactory, ScalarsConverterFactory,
};
use crate::error::RetrofitError;
use crate::interceptor::HttpExceptionMessageFormatterInterceptor;
use crate::pool::ConnectionPool;
use crate::registry::ExtensionRegistry;
use super::{RetrofitConfigBean, RetrofitProperties};

/// 启动时的自动装配
///
/// ```no_run
/// use retrofit_common::{RetrofitAutoConfiguration, RetrofitProperties};
///
/// let properties = RetrofitProperties::from_yaml_file("config/application.yml")?;
/// let config = RetrofitAutoConfiguration::new(properties).build()?;
/// # Ok::<(), retrofit_common::RetrofitError>(())
/// ```
pub struct RetrofitAutoConfiguration {
    properties: RetrofitProperties,
    registry: ExtensionRegistry,
}

impl RetrofitAutoConfiguration {
    pub fn new(properties: RetrofitProperties) -> Self {
        Self {
            properties,
            registry: ExtensionRegistry::default(),
        }
    }

    /// 使用自定义扩展注册表
    pub fn registry(mut self, registry: ExtensionRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn build(self) -> Result<Arc<RetrofitConfigBean>, RetrofitError> {
        let Self { properties, registry } = self;

        let mut pool_registry = HashMap::new();
        for (name, config) in properties.pool() {
            pool_registry.insert(name.clone(), ConnectionPool::new(name.clone(), *config)?);
        }

        let mut call_adapter_factories: Vec<Arc<dyn CallAdapterFactory>> =
            registry.call_adapter_factories().to_vec();
        if properties.enable_response_call_adapter {
            call_adapter_factories.push(Arc::new(ResponseCallAdapterFactory));
        }
        if properties.enable_body_call_adapter {
            call_adapter_factories.push(Arc::new(BodyCallAdapterFactory));
        }
        call_adapter_factories.push(Arc::new(DefaultCallAdapterFactory));

        let mut converter_factories: Vec<Arc<dyn ConverterFactory>> = registry.converter_factories().to_vec();
        converter_factories.push(Arc::new(ScalarsConverterFactory));
        converter_factories.push(Arc::new(FormUrlEncodedConverterFactory));
        converter_factories.push(Arc::new(JsonConverterFactory));

        let formatter = registry.message_formatter(&properties.http_exception_message_formatter)?;

        let logging_interceptor_factory = if properties.enable_log {
            Some(registry.logging_interceptor(&properties.logging_interceptor)?)
        } else {
            None
        };

        log::info!(
            "Retrofit configured with pools {:?}, call adapters [{}], log {}",
            pool_registry.keys().collect::<Vec<_>>(),
            call_adapter_factories
                .iter()
                .map(|factory| factory.name())
                .collect::<Vec<_>>()
                .join(", "),
            if properties.enable_log { properties.logging_interceptor.as_str() } else { "disabled" }
        );

        let mut bean = RetrofitConfigBean::new(properties);
        bean.set_pool_registry(pool_registry);
        bean.set_call_adapter_factories(call_adapter_factories);
        bean.set_converter_factories(converter_factories);
        bean.set_global_interceptors(registry.global_interceptors().to_vec());
        bean.set_http_exception_message_formatter_interceptor(Arc::new(
            HttpExceptionMessageFormatterInterceptor::new(formatter),
        ));
        bean.set_logging_interceptor_factory(logging_interceptor_factory);

        Ok(Arc::new(bean))
    }
}
