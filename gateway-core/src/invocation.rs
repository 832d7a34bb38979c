//! Titan request and response shapes.

use serde::Serialize;
use serde_json::Value;

use crate::error::{describe_json_error, GatewayError, Result};
use crate::request::IncomingRequest;

/// Sampling temperature sent with every request
pub const TEMPERATURE: f32 = 0.2;

/// Upper bound on generated tokens
pub const MAX_TOKEN_COUNT: u32 = 300;

/// Nucleus sampling cutoff
pub const TOP_P: f32 = 0.9;

/// Generation parameters in Titan's `textGenerationConfig` block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextGenerationConfig {
    pub temperature: f32,
    pub max_token_count: u32,
    pub top_p: f32,
}

impl Default for TextGenerationConfig {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE,
            max_token_count: MAX_TOKEN_COUNT,
            top_p: TOP_P,
        }
    }
}

/// One outbound call to the model, built per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInvocation {
    /// Target model; travels beside the payload, not inside it
    #[serde(skip)]
    pub model_id: String,
    pub input_text: String,
    pub text_generation_config: TextGenerationConfig,
}

impl ModelInvocation {
    /// Build the invocation for a validated request.
    pub fn new(model_id: impl Into<String>, request: &IncomingRequest) -> Self {
        Self {
            model_id: model_id.into(),
            input_text: request.text.clone(),
            text_generation_config: TextGenerationConfig::default(),
        }
    }

    /// Encode the request body sent to the model.
    pub fn to_payload(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// The generated text pulled out of a model response.
///
/// `outputText` must be a string. A `null` or non-string value is treated
/// as a malformed response and reported as an internal error rather than
/// passed through as `{"response": null}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelResult {
    pub output_text: String,
}

impl ModelResult {
    /// Read `results[0].outputText` from a raw model response body.
    pub fn from_response(body: &[u8]) -> Result<Self> {
        let response: Value = serde_json::from_slice(body).map_err(|e| {
            GatewayError::InvalidResponse(format!("Failed to parse response: {}", describe_json_error(&e)))
        })?;

        let results = response["results"]
            .as_array()
            .ok_or_else(|| GatewayError::InvalidResponse("Missing or non-array 'results'".into()))?;

        let first = results
            .first()
            .ok_or_else(|| GatewayError::InvalidResponse("Response contained no results".into()))?;

        first["outputText"]
            .as_str()
            .map(|text| Self { output_text: text.to_string() })
            .ok_or_else(|| GatewayError::InvalidResponse("Missing or non-string 'results[0].outputText'".into()))
    }
}
