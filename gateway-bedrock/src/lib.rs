//! Amazon Bedrock backend for the text-generation gateway.
//!
//! Wraps a Bedrock runtime client as a [`TextGenerationCapability`] so the
//! gateway can forward requests to hosted models.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client;
use tracing::debug;

use gateway_core::{GatewayError, Result, TextGenerationCapability};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Bedrock runtime client used as the gateway's remote capability.
#[derive(Clone, Debug)]
pub struct BedrockCapability {
    /// AWS Bedrock client
    client: Client,
}

impl BedrockCapability {
    /// Load AWS configuration from the environment and build a client
    /// pinned to `region`.
    pub async fn connect(region: &str) -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()))
            .load()
            .await;

        Self::from_client(Client::new(&config))
    }

    /// Use an already configured client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TextGenerationCapability for BedrockCapability {
    async fn invoke_model(&self, model_id: &str, payload: Vec<u8>) -> Result<Vec<u8>> {
        debug!("Sending {} byte payload to {}", payload.len(), model_id);

        let response = self
            .client
            .invoke_model()
            .model_id(model_id)
            .body(Blob::new(payload))
            .content_type(JSON_CONTENT_TYPE)
            .accept(JSON_CONTENT_TYPE)
            .send()
            .await
            .map_err(|e| {
                GatewayError::InvocationError(format!(
                    "Failed to invoke Bedrock model {}: {}",
                    model_id,
                    DisplayErrorContext(&e)
                ))
            })?;

        Ok(response.body.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_bedrockruntime::config::retry::RetryConfig;
    use aws_sdk_bedrockruntime::config::{BehaviorVersion, Credentials, Region};

    fn unreachable_client() -> Client {
        let config = aws_sdk_bedrockruntime::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::new("AKIDTEST", "secret", None, None, "test"))
            .endpoint_url("http://127.0.0.1:1")
            .retry_config(RetryConfig::disabled())
            .build();
        Client::from_conf(config)
    }

    #[tokio::test]
    async fn transport_failure_maps_to_invocation_error() {
        let capability = BedrockCapability::from_client(unreachable_client());

        let err = capability
            .invoke_model("amazon.titan-text-express-v1", b"{}".to_vec())
            .await
            .unwrap_err();

        match err {
            GatewayError::InvocationError(message) => {
                assert!(message.contains("amazon.titan-text-express-v1"));
            }
            other => panic!("expected invocation error, got {:?}", other),
        }
    }
}
