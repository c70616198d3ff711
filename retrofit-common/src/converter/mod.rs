//! 请求体/响应体转换器
//!
//! 转换器以 `serde_json::Value` 作为中间形态：请求参数先序列化为 `Value`，
//! 再由与 Content-Type 匹配的转换器编码为字节；响应体则先解码为 `Value`，
//! 再反序列化为声明的返回类型。

pub mod json;
pub mod scalars;
pub mod form;

pub use json::JsonConverterFactory;
pub use scalars::ScalarsConverterFactory;
pub use form::FormUrlEncodedConverterFactory;

use serde_json::Value;

/// 转换器工厂
pub trait ConverterFactory: Send + Sync {
    fn name(&self) -> &str;

    /// 是否能处理给定的媒体类型（已去掉参数并转为小写，`None` 表示响应没有 Content-Type）
    fn supports(&self, media_type: Option<&str>) -> bool;

    fn encode(&self, value: &Value) -> anyhow::Result<Vec<u8>>;

    fn decode(&self, body: &[u8]) -> anyhow::Result<Value>;
}

/// 把标量值渲染为纯文本，字符串不带引号
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
