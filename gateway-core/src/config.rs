//! Static configuration for the gateway.

/// Titan Text Express model ID on Bedrock
pub const DEFAULT_MODEL_ID: &str = "amazon.titan-text-express-v1";

/// AWS region hosting the Bedrock runtime endpoint
pub const DEFAULT_REGION: &str = "us-east-1";

/// Settings shared by every invocation of the gateway.
///
/// Built once at process start and handed to [`crate::Gateway::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Region the Bedrock client is pinned to
    pub region: String,
    /// Model every request is forwarded to
    pub model_id: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
        }
    }
}
