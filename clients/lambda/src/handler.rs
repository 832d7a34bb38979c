//! API Gateway event handler for the Titan Lambda
//!
//! Adapts raw Lambda events to the gateway pipeline and the pipeline's
//! response back to the proxy-integration JSON API Gateway expects.

use gateway_core::{Gateway, GatewayResponse, TextGenerationCapability, INTERNAL_ERROR_BODY};
use lambda_runtime::{Error, LambdaEvent};
use serde_json::{json, Value};
use tracing::error;

/// Handle one Lambda invocation.
///
/// Always returns `Ok`; failures are reported to the caller as HTTP status
/// codes rather than as Lambda errors.
pub async fn handle_event<C: TextGenerationCapability>(
    gateway: &Gateway<C>,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let request_id = event.context.request_id;
    let response = gateway.handle(&request_id, &event.payload).await;

    Ok(into_proxy_response(&request_id, response))
}

/// Render a gateway response as an API Gateway proxy response.
fn into_proxy_response(request_id: &str, response: GatewayResponse) -> Value {
    match serde_json::to_value(&response) {
        Ok(value) => value,
        Err(e) => {
            error!("[{}] Failed to serialize response: {}", request_id, e);
            json!({ "statusCode": 500, "body": INTERNAL_ERROR_BODY })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateway_core::{GatewayError, MISSING_TEXT_BODY};

    #[test]
    fn success_carries_json_content_type() {
        let response = GatewayResponse::ok("Hi there!").unwrap();

        assert_eq!(
            into_proxy_response("req-1", response),
            json!({
                "statusCode": 200,
                "headers": { "Content-Type": "application/json" },
                "body": "{\"response\": \"Hi there!\"}"
            })
        );
    }

    #[test]
    fn errors_have_no_headers() {
        let missing = into_proxy_response("req-1", GatewayResponse::from_error(&GatewayError::MissingText));
        assert_eq!(missing, json!({ "statusCode": 400, "body": MISSING_TEXT_BODY }));

        let internal = into_proxy_response(
            "req-1",
            GatewayResponse::from_error(&GatewayError::InvocationError("throttled".into())),
        );
        assert_eq!(internal, json!({ "statusCode": 500, "body": INTERNAL_ERROR_BODY }));
    }
}
