use serde_json::{Map, Value};
use url::form_urlencoded;
use crate::converter::{ConverterFactory, scalar_text};
use crate::error::RetrofitError;

/// 表单转换器（`application/x-www-form-urlencoded`）
///
/// 只接受扁平对象：标量字段编码为一个键值对，数组字段编码为重复的键，
/// `null` 字段被忽略。
#[derive(Debug, Default)]
pub struct FormUrlEncodedConverterFactory;

impl ConverterFactory for FormUrlEncodedConverterFactory {
    fn name(&self) -> &str {
        "form"
    }

    fn supports(&self, media_type: Option<&str>) -> bool {
        media_type == Some("application/x-www-form-urlencoded")
    }

    fn encode(&self, value: &Value) -> anyhow::Result<Vec<u8>> {
        let object = value.as_object().ok_or_else(|| {
            RetrofitError::InvalidRequest("form body must serialize to an object".to_string())
        })?;

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, field) in object {
            match field {
                Value::Object(_) => {
                    return Err(RetrofitError::InvalidRequest(format!(
                        "form field '{}' cannot be a nested object",
                        key
                    ))
                    .into());
                }
                Value::Array(items) => {
                    for item in items {
                        if let Some(text) = scalar_text(item) {
                            serializer.append_pair(key, &text);
                        }
                    }
                }
                scalar => {
                    if let Some(text) = scalar_text(scalar) {
                        serializer.append_pair(key, &text);
                    }
                }
            }
        }
        Ok(serializer.finish().into_bytes())
    }

    fn decode(&self, body: &[u8]) -> anyhow::Result<Value> {
        let mut object = Map::new();
        for (key, value) in form_urlencoded::parse(body) {
            object.insert(key.into_owned(), Value::String(value.into_owned()));
        }
        Ok(Value::Object(object))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_flat_object() {
        let encoded = FormUrlEncodedConverterFactory
            .encode(&json!({"name": "张 三", "age": 10, "tags": ["a", "b"], "nick": null}))
            .unwrap();
        let encoded = String::from_utf8(encoded).unwrap();
        assert_eq!(encoded, "age=10&name=%E5%BC%A0+%E4%B8%89&tags=a&tags=b");
    }

    #[test]
    fn test_encode_rejects_nested_objects() {
        assert!(FormUrlEncodedConverterFactory.encode(&json!({"a": {"b": 1}})).is_err());
        assert!(FormUrlEncodedConverterFactory.encode(&json!([1, 2])).is_err());
    }

    #[test]
    fn test_decode_pairs() {
        let value = FormUrlEncodedConverterFactory.decode(b"name=test&age=10").unwrap();
        assert_eq!(value, json!({"name": "test", "age": "10"}));
    }
}
