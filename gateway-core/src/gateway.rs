//! The request pipeline: event in, HTTP-shaped response out.

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::capability::TextGenerationCapability;
use crate::config::GatewayConfig;
use crate::error::Result;
use crate::invocation::{ModelInvocation, ModelResult};
use crate::request::IncomingRequest;
use crate::response::GatewayResponse;

/// Forwards caller text to a text-generation capability.
///
/// Holds no per-request state; the capability is built once and reused.
pub struct Gateway<C> {
    capability: C,
    config: GatewayConfig,
}

impl<C: TextGenerationCapability> Gateway<C> {
    /// Create a gateway around an already constructed capability.
    pub fn new(capability: C, config: GatewayConfig) -> Self {
        Self { capability, config }
    }

    /// Handle one API Gateway event.
    ///
    /// Never fails: every error is logged and turned into a 400 or 500.
    pub async fn handle(&self, request_id: &str, event: &Value) -> GatewayResponse {
        info!("[{}] Invocation started", request_id);

        match self.generate(request_id, event).await {
            Ok(response) => response,
            Err(e) if e.is_validation() => {
                warn!("[{}] {}", request_id, e);
                GatewayResponse::from_error(&e)
            }
            Err(e) => {
                error!("[{}] Error during invocation: {}", request_id, e);
                GatewayResponse::from_error(&e)
            }
        }
    }

    async fn generate(&self, request_id: &str, event: &Value) -> Result<GatewayResponse> {
        if let Some(fields) = event.as_object() {
            debug!(
                "[{}] Incoming event keys: {:?}",
                request_id,
                fields.keys().collect::<Vec<_>>()
            );
        }

        let request = IncomingRequest::from_event(event)?;
        info!("[{}] Text received (length={})", request_id, request.text.chars().count());

        let invocation = ModelInvocation::new(self.config.model_id.as_str(), &request);
        let payload = invocation.to_payload()?;

        info!("[{}] Invoking model: {}", request_id, invocation.model_id);
        let raw = self.capability.invoke_model(&invocation.model_id, payload).await?;
        info!("[{}] Model invocation successful", request_id);

        let result = ModelResult::from_response(&raw)?;
        info!(
            "[{}] Response generated (length={})",
            request_id,
            result.output_text.chars().count()
        );

        GatewayResponse::ok(&result.output_text)
    }
}
