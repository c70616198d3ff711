use std::sync::{Arc, Mutex};
use std::time::Duration;
use crate::config::{RetrofitConfigBean, DEFAULT_POOL_NAME};
use crate::error::RetrofitError;
use crate::interceptor::{Interceptor, InterceptorCache, LogStrategy};
use super::RetrofitClient;

/// `RetrofitClient` 构建器
///
/// 生成的客户端构造函数通过它把 `#[retrofit_client]` 上声明的参数交给运行时。
pub struct RetrofitClientBuilder {
    config: Arc<RetrofitConfigBean>,
    base_url: String,
    pool: String,
    log_level: Option<log::Level>,
    log_strategy: Option<LogStrategy>,
    interceptor: Option<Arc<dyn Interceptor>>,
    timeout: Option<Duration>,
}

impl RetrofitClientBuilder {
    pub fn new(config: Arc<RetrofitConfigBean>) -> Self {
        Self {
            config,
            base_url: String::new(),
            pool: DEFAULT_POOL_NAME.to_string(),
            log_level: None,
            log_strategy: None,
            interceptor: None,
            timeout: None,
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn pool(mut self, pool: impl Into<String>) -> Self {
        self.pool = pool.into();
        self
    }

    pub fn log_level(mut self, level: log::Level) -> Self {
        self.log_level = Some(level);
        self
    }

    pub fn log_strategy(mut self, strategy: LogStrategy) -> Self {
        self.log_strategy = Some(strategy);
        self
    }

    /// 客户端级拦截器，作用于该客户端的所有方法
    pub fn interceptor(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.interceptor = Some(interceptor);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<RetrofitClient, RetrofitError> {
        let http = self.config.pool(&self.pool)?.client().clone();

        let properties = self.config.properties();
        let level = self.log_level.unwrap_or(properties.global_log_level);
        let strategy = self.log_strategy.unwrap_or(properties.global_log_strategy);
        let logging = self
            .config
            .logging_interceptor_factory()
            .map(|factory| factory(level, strategy));

        let mut interceptors = self.config.global_interceptors().to_vec();
        interceptors.extend(self.interceptor);

        log::debug!(
            "Built retrofit client (base url '{}', pool '{}', log {} {})",
            self.base_url,
            self.pool,
            level,
            strategy
        );

        Ok(RetrofitClient {
            config: self.config,
            http,
            base_url: self.base_url,
            interceptors,
            logging,
            method_interceptors: Arc::new(Mutex::new(InterceptorCache::new())),
            timeout: self.timeout,
        })
    }
}
