use serde_json::Value;
use crate::converter::ConverterFactory;

/// JSON 转换器，处理 `application/json`、`*/*+json` 以及没有 Content-Type 的响应
#[derive(Debug, Default)]
pub struct JsonConverterFactory;

impl ConverterFactory for JsonConverterFactory {
    fn name(&self) -> &str {
        "json"
    }

    fn supports(&self, media_type: Option<&str>) -> bool {
        match media_type {
            None => true,
            Some(media_type) => media_type == "application/json" || media_type.ends_with("+json"),
        }
    }

    fn encode(&self, value: &Value) -> anyhow::Result<Vec<u8>> {
        Ok(serde_json::to_vec(value)?)
    }

    fn decode(&self, body: &[u8]) -> anyhow::Result<Value> {
        // 空响应体按 null 处理，便于解码为 Option<T> 或 ()
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(body)?)
    }
}
