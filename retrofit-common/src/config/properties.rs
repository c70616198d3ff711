use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::error::RetrofitError;
use crate::interceptor::LogStrategy;

/// 没有配置任何连接池时使用的连接池名称
pub const DEFAULT_POOL_NAME: &str = "default";
/// 默认连接池的最大空闲连接数
pub const DEFAULT_MAX_IDLE_CONNECTIONS: usize = 5;
/// 默认连接池的保活时长（秒）
pub const DEFAULT_KEEP_ALIVE_SECS: u64 = 300;

/// 连接池配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PoolConfig {
    pub max_idle_connections: usize,
    /// 空闲连接保活时长，单位秒
    pub keep_alive_duration: u64,
}

impl PoolConfig {
    pub fn new(max_idle_connections: usize, keep_alive_duration: u64) -> Self {
        Self {
            max_idle_connections,
            keep_alive_duration,
        }
    }

    pub fn keep_alive(&self) -> Duration {
        Duration::from_secs(self.keep_alive_duration)
    }
}

/// `retrofit:` 配置段
///
/// ```yaml
/// retrofit:
///   pool:
///     test1:
///       max-idle-connections: 3
///       keep-alive-duration: 300
///   enable-response-call-adapter: true
///   enable-log: true
///   logging-interceptor-class: default
///   disable-void-return-type: false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RetrofitProperties {
    pool: BTreeMap<String, PoolConfig>,

    /// 首次读取 `pool()` 时才生成的默认连接池
    #[serde(skip)]
    default_pool: OnceLock<BTreeMap<String, PoolConfig>>,

    pub enable_body_call_adapter: bool,

    pub enable_response_call_adapter: bool,

    pub enable_log: bool,

    /// 日志拦截器在 `ExtensionRegistry` 中的注册名称
    #[serde(rename = "logging-interceptor-class")]
    pub logging_interceptor: String,

    /// Http 异常信息格式化器在 `ExtensionRegistry` 中的注册名称
    #[serde(rename = "http-exception-message-formatter-class")]
    pub http_exception_message_formatter: String,

    /// 为 true 时拒绝返回 `()` 的接口方法
    pub disable_void_return_type: bool,

    /// 客户端未声明 `log_level` 时使用的日志级别
    pub global_log_level: log::Level,

    /// 客户端未声明 `log_strategy` 时使用的日志策略
    pub global_log_strategy: LogStrategy,
}

impl Default for RetrofitProperties {
    fn default() -> Self {
        Self {
            pool: BTreeMap::new(),
            default_pool: OnceLock::new(),
            enable_body_call_adapter: true,
            enable_response_call_adapter: true,
            enable_log: true,
            logging_interceptor: "default".to_string(),
            http_exception_message_formatter: "default".to_string(),
            disable_void_return_type: false,
            global_log_level: log::Level::Info,
            global_log_strategy: LogStrategy::Basic,
        }
    }
}

#[derive(Deserialize)]
struct ApplicationConfig {
    #[serde(default)]
    retrofit: RetrofitProperties,
}

impl RetrofitProperties {
    /// 连接池配置
    ///
    /// 配置非空时原样返回；为空时在首次读取时生成只包含
    /// `default -> (5, 300)` 的映射，之后每次读取都返回同一份。
    pub fn pool(&self) -> &BTreeMap<String, PoolConfig> {
        if !self.pool.is_empty() {
            return &self.pool;
        }
        self.default_pool.get_or_init(|| {
            BTreeMap::from([(
                DEFAULT_POOL_NAME.to_string(),
                PoolConfig::new(DEFAULT_MAX_IDLE_CONNECTIONS, DEFAULT_KEEP_ALIVE_SECS),
            )])
        })
    }

    pub fn set_pool(&mut self, pool: BTreeMap<String, PoolConfig>) {
        self.pool = pool;
        self.default_pool = OnceLock::new();
    }

    /// 从 YAML 文本读取 `retrofit:` 配置段，缺失时返回默认值
    pub fn from_yaml_str(source: &str) -> Result<Self, RetrofitError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: ApplicationConfig =
            serde_yaml::from_str(source).map_err(|e| RetrofitError::Config(e.to_string()))?;
        Ok(config.retrofit)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, RetrofitError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| RetrofitError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let properties = RetrofitProperties::default();
        assert!(properties.enable_body_call_adapter);
        assert!(properties.enable_response_call_adapter);
        assert!(properties.enable_log);
        assert!(!properties.disable_void_return_type);
        assert_eq!(properties.logging_interceptor, "default");
        assert_eq!(properties.http_exception_message_formatter, "default");
        assert_eq!(properties.global_log_level, log::Level::Info);
        assert_eq!(properties.global_log_strategy, LogStrategy::Basic);
    }

    #[test]
    fn test_default_pool_materialized_on_read() {
        let properties = RetrofitProperties::default();
        assert!(properties.default_pool.get().is_none());

        let pool = properties.pool();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get("default"), Some(&PoolConfig::new(5, 300)));
        assert!(properties.default_pool.get().is_some());

        // 后续读取返回同一份映射
        assert!(std::ptr::eq(pool, properties.pool()));
    }

    #[test]
    fn test_configured_pool_returned_unchanged() {
        let mut properties = RetrofitProperties::default();
        let configured = BTreeMap::from([
            ("test1".to_string(), PoolConfig::new(3, 300)),
            ("test2".to_string(), PoolConfig::new(2, 60)),
        ]);
        properties.set_pool(configured.clone());

        assert_eq!(properties.pool(), &configured);
        assert!(!properties.pool().contains_key("default"));
        assert!(properties.default_pool.get().is_none());
    }

    #[test]
    fn test_yaml_kebab_case_keys() {
        let yaml = r#"
server:
  port: 8080
retrofit:
  pool:
    test1:
      max-idle-connections: 3
      keep-alive-duration: 300
  enable-response-call-adapter: false
  enable-log: false
  logging-interceptor-class: custom
  http-exception-message-formatter-class: terse
  disable-void-return-type: true
  global-log-level: debug
  global-log-strategy: BODY
"#;
        let properties = RetrofitProperties::from_yaml_str(yaml).unwrap();

        assert_eq!(properties.pool().get("test1"), Some(&PoolConfig::new(3, 300)));
        assert_eq!(properties.pool().len(), 1);
        assert!(properties.enable_body_call_adapter);
        assert!(!properties.enable_response_call_adapter);
        assert!(!properties.enable_log);
        assert_eq!(properties.logging_interceptor, "custom");
        assert_eq!(properties.http_exception_message_formatter, "terse");
        assert!(properties.disable_void_return_type);
        assert_eq!(properties.global_log_level, log::Level::Debug);
        assert_eq!(properties.global_log_strategy, LogStrategy::Body);
    }

    #[test]
    fn test_yaml_log_strategy_is_case_insensitive() {
        let properties = RetrofitProperties::from_yaml_str("retrofit:\n  global-log-strategy: Headers\n").unwrap();
        assert_eq!(properties.global_log_strategy, LogStrategy::Headers);

        let properties = RetrofitProperties::from_yaml_str("retrofit:\n  global-log-strategy: nOnE\n").unwrap();
        assert_eq!(properties.global_log_strategy, LogStrategy::None);

        assert!(RetrofitProperties::from_yaml_str("retrofit:\n  global-log-strategy: verbose\n").is_err());
    }

    #[test]
    fn test_yaml_without_retrofit_section() {
        let properties = RetrofitProperties::from_yaml_str("server:\n  port: 8080\n").unwrap();
        assert!(properties.enable_log);
        assert!(properties.pool().contains_key("default"));

        assert!(RetrofitProperties::from_yaml_str("").unwrap().enable_log);
    }

    #[test]
    fn test_yaml_type_errors_are_reported() {
        let yaml = "retrofit:\n  pool:\n    test1:\n      max-idle-connections: -1\n      keep-alive-duration: 300\n";
        let error = RetrofitProperties::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(error, RetrofitError::Config(_)));
    }
}
