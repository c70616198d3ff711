use crate::config::PoolConfig;
use crate::error::RetrofitError;

/// 命名连接池
///
/// 每个连接池对应一个独立的 `reqwest::Client`。`reqwest::Client` 内部以
/// `Arc` 共享连接，克隆后仍然指向同一个池，因此引用同一名称的所有客户端
/// 复用同一组连接。空闲连接上限按主机计算。
#[derive(Debug, Clone)]
pub struct ConnectionPool {
    name: String,
    config: PoolConfig,
    client: reqwest::Client,
}

impl ConnectionPool {
    pub fn new(name: impl Into<String>, config: PoolConfig) -> Result<Self, RetrofitError> {
        let name = name.into();
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(config.max_idle_connections)
            .pool_idle_timeout(config.keep_alive())
            .build()?;

        log::debug!(
            "Created connection pool '{}' (max idle {}, keep alive {}s)",
            name,
            config.max_idle_connections,
            config.keep_alive_duration
        );

        Ok(Self { name, config, client })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> PoolConfig {
        self.config
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}
