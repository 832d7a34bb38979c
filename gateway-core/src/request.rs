//! Reading the caller's request out of an API Gateway proxy event.

use serde_json::{Map, Value};

use crate::error::{describe_json_error, GatewayError, Result};

/// A validated text-generation request from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingRequest {
    /// Prompt text to forward to the model, never empty
    pub text: String,
}

impl IncomingRequest {
    /// Extract and validate the request carried by an API Gateway event.
    pub fn from_event(event: &Value) -> Result<Self> {
        let body = parse_body(event)?;
        Self::from_body(&body)
    }

    /// Validate the `text` field of an already parsed body.
    ///
    /// Any falsy value counts as missing. A truthy value that is not a
    /// string is a malformed request, not a missing one.
    pub fn from_body(body: &Map<String, Value>) -> Result<Self> {
        match body.get("text") {
            Some(Value::String(text)) if !text.is_empty() => Ok(Self { text: text.clone() }),
            Some(value) if is_truthy(value) => Err(GatewayError::InvalidBody(format!(
                "'text' must be a string, got {}",
                kind(value)
            ))),
            _ => Err(GatewayError::MissingText),
        }
    }
}

/// Parse the `body` field of an event into a JSON object.
///
/// An event with no `body` reads as `{}`.
pub fn parse_body(event: &Value) -> Result<Map<String, Value>> {
    let event = event
        .as_object()
        .ok_or_else(|| GatewayError::InvalidBody(format!("event is {}, not an object", kind(event))))?;

    let raw = match event.get("body") {
        None => "{}",
        Some(Value::String(body)) => body.as_str(),
        Some(other) => {
            return Err(GatewayError::InvalidBody(format!(
                "body is {}, not a string",
                kind(other)
            )))
        }
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(body)) => Ok(body),
        Ok(other) => Err(GatewayError::InvalidBody(format!(
            "body is {}, not an object",
            kind(&other)
        ))),
        Err(e) => Err(GatewayError::InvalidBody(format!("malformed JSON: {}", describe_json_error(&e)))),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event_with_body(body: &str) -> Value {
        json!({ "body": body, "httpMethod": "POST" })
    }

    #[test]
    fn reads_text_from_body() {
        let request = IncomingRequest::from_event(&event_with_body(r#"{"text": "Hello"}"#)).unwrap();
        assert_eq!(request.text, "Hello");
    }

    #[test]
    fn absent_body_reads_as_empty_object() {
        let event = json!({ "httpMethod": "POST" });
        assert!(parse_body(&event).unwrap().is_empty());
        assert_eq!(IncomingRequest::from_event(&event), Err(GatewayError::MissingText));
    }

    #[test]
    fn falsy_text_counts_as_missing() {
        for body in [
            r#"{}"#,
            r#"{"text": ""}"#,
            r#"{"text": null}"#,
            r#"{"text": false}"#,
            r#"{"text": 0}"#,
            r#"{"text": []}"#,
            r#"{"text": {}}"#,
        ] {
            assert_eq!(
                IncomingRequest::from_event(&event_with_body(body)),
                Err(GatewayError::MissingText),
                "body {}",
                body
            );
        }
    }

    #[test]
    fn truthy_non_string_text_is_invalid() {
        for body in [r#"{"text": 42}"#, r#"{"text": ["a"]}"#, r#"{"text": true}"#] {
            let err = IncomingRequest::from_event(&event_with_body(body)).unwrap_err();
            assert!(matches!(err, GatewayError::InvalidBody(_)), "body {}", body);
        }
    }

    #[test]
    fn malformed_json_is_invalid_not_missing() {
        let err = parse_body(&event_with_body("{not json")).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidBody(_)));
    }

    #[test]
    fn non_object_json_is_invalid() {
        for body in ["[1]", "\"text\"", "null", "3"] {
            let err = parse_body(&event_with_body(body)).unwrap_err();
            assert!(matches!(err, GatewayError::InvalidBody(_)), "body {}", body);
        }
    }

    #[test]
    fn null_or_non_string_body_is_invalid() {
        for event in [json!({ "body": null }), json!({ "body": { "text": "Hello" } })] {
            let err = parse_body(&event).unwrap_err();
            assert!(matches!(err, GatewayError::InvalidBody(_)));
        }
    }

    #[test]
    fn non_object_event_is_invalid() {
        let err = parse_body(&json!("body")).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidBody(_)));
    }
}
