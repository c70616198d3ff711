use serde_json::Value;
use crate::converter::{ConverterFactory, scalar_text};

/// 纯文本转换器（`text/plain`）
#[derive(Debug, Default)]
pub struct ScalarsConverterFactory;

impl ConverterFactory for ScalarsConverterFactory {
    fn name(&self) -> &str {
        "scalars"
    }

    fn supports(&self, media_type: Option<&str>) -> bool {
        media_type == Some("text/plain")
    }

    fn encode(&self, value: &Value) -> anyhow::Result<Vec<u8>> {
        Ok(scalar_text(value).unwrap_or_default().into_bytes())
    }

    fn decode(&self, body: &[u8]) -> anyhow::Result<Value> {
        Ok(Value::String(String::from_utf8_lossy(body).into_owned()))
    }
}
