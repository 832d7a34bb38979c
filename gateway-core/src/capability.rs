//! The remote text-generation capability the gateway forwards to.

use async_trait::async_trait;

use crate::error::Result;

/// A hosted model that turns a JSON request body into a JSON response body.
///
/// Implementations are shared read-only across invocations.
#[async_trait]
pub trait TextGenerationCapability: Send + Sync {
    /// Send `payload` to `model_id` and return the raw response body.
    async fn invoke_model(&self, model_id: &str, payload: Vec<u8>) -> Result<Vec<u8>>;
}
