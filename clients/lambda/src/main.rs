//! Titan gateway Lambda
//!
//! Receives API Gateway proxy events, forwards the caller's text to Titan
//! Text Express on Bedrock, and answers with the generated text.

use gateway_bedrock::BedrockCapability;
use gateway_core::{Gateway, GatewayConfig};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing for Lambda CloudWatch logs
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(false) // Lambda doesn't support ANSI colors
        .without_time() // Lambda adds timestamps
        .init();

    info!("Titan gateway Lambda initializing");

    // One client for the lifetime of the process, shared by every invocation
    let config = GatewayConfig::default();
    let capability = BedrockCapability::connect(&config.region).await;
    info!("Bedrock client ready (region={}, model={})", config.region, config.model_id);

    let gateway = Gateway::new(capability, config);
    let gateway = &gateway;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler::handle_event(gateway, event).await
    }))
    .await?;

    Ok(())
}
