use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of POST /api/data, echoed back untouched.
///
/// A field missing from the request stays missing in the echo; an explicit
/// `null` is kept as `null`. A body that is not a JSON object has neither.
#[derive(Debug, Serialize, Clone, Default, PartialEq, utoipa::ToSchema)]
pub struct EchoPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub key: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub value: Option<Value>,
}

impl From<Value> for EchoPayload {
    fn from(body: Value) -> Self {
        match body {
            Value::Object(mut fields) => Self {
                key: fields.remove("key"),
                value: fields.remove("value"),
            },
            _ => Self::default(),
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct EchoResponse {
    pub received: EchoPayload,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct GreetingResponse {
    pub message: String,
}

pub fn greeting(name: &str) -> GreetingResponse {
    GreetingResponse {
        message: format!("Hello, {}! 👋", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_is_kept() {
        let payload = EchoPayload::from(json!({"key": null, "value": 1}));
        assert_eq!(payload.key, Some(Value::Null));
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"key": null, "value": 1})
        );
    }

    #[test]
    fn test_missing_field_is_omitted() {
        let payload = EchoPayload::from(json!({"value": [1, 2]}));
        assert_eq!(payload.key, None);
        assert_eq!(serde_json::to_value(&payload).unwrap(), json!({"value": [1, 2]}));
    }

    #[test]
    fn test_extra_fields_are_dropped() {
        let payload = EchoPayload::from(json!({"key": "k", "value": "v", "other": true}));
        assert_eq!(serde_json::to_value(&payload).unwrap(), json!({"key": "k", "value": "v"}));
    }

    #[test]
    fn test_non_object_body_has_no_fields() {
        for body in [json!([1, 2]), json!("text"), json!(7), Value::Null] {
            assert_eq!(EchoPayload::from(body), EchoPayload::default());
        }
    }

    #[test]
    fn test_greeting_keeps_name_verbatim() {
        assert_eq!(greeting("Zoë O'Neil").message, "Hello, Zoë O'Neil! 👋");
    }
}
