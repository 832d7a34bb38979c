//! HTTP-shaped responses returned to API Gateway.
//!
//! Bodies are rendered with `", "` and `": "` separators and ASCII-only
//! string escapes, the exact format clients of this endpoint receive.

use std::collections::BTreeMap;
use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::json;

use crate::error::{GatewayError, Result};

/// Body returned when the request has no usable `text`
pub const MISSING_TEXT_BODY: &str = r#"{"error": "Missing 'text' field in request body"}"#;

/// Body returned for every other failure
pub const INTERNAL_ERROR_BODY: &str = r#"{"error": "Internal server error"}"#;

/// Response handed back to API Gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    pub body: String,
}

impl GatewayResponse {
    /// 200 response carrying the generated text.
    pub fn ok(output_text: &str) -> Result<Self> {
        let body = to_body(&json!({ "response": output_text }))?;
        let headers = BTreeMap::from([("Content-Type".to_string(), "application/json".to_string())]);

        Ok(Self {
            status_code: 200,
            headers: Some(headers),
            body,
        })
    }

    /// Map any pipeline error to the response the caller sees.
    ///
    /// Validation errors get their own status and message; everything else
    /// is reported as an opaque 500.
    pub fn from_error(err: &GatewayError) -> Self {
        let (status_code, body) = if err.is_validation() {
            (400, MISSING_TEXT_BODY)
        } else {
            (500, INTERNAL_ERROR_BODY)
        };

        Self {
            status_code,
            headers: None,
            body: body.to_string(),
        }
    }
}

/// Render a value as a response body string.
pub fn to_body<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, BodyFormatter);
    value.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| GatewayError::SerializationError(e.to_string()))
}

struct BodyFormatter;

impl Formatter for BodyFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() && ch != '\u{7f}' {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}
