pub mod properties;
pub mod bean;
pub mod auto;

pub use properties::{
    PoolConfig, RetrofitProperties, DEFAULT_KEEP_ALIVE_SECS, DEFAULT_MAX_IDLE_CONNECTIONS,
    DEFAULT_POOL_NAME,
};
pub use bean::RetrofitConfigBean;
pub use auto::RetrofitAutoConfiguration;
