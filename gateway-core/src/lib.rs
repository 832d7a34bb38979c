//! Core of the Titan text-generation gateway.
//!
//! Translates API Gateway proxy events into Titan text-generation requests
//! and model responses back into HTTP-shaped replies. The remote model sits
//! behind [`TextGenerationCapability`] so the pipeline does not depend on a
//! particular SDK.

pub mod capability;
pub mod config;
pub mod error;
pub mod gateway;
pub mod invocation;
pub mod request;
pub mod response;

pub use capability::TextGenerationCapability;
pub use config::{GatewayConfig, DEFAULT_MODEL_ID, DEFAULT_REGION};
pub use error::{GatewayError, Result};
pub use gateway::Gateway;
pub use invocation::{ModelInvocation, ModelResult, TextGenerationConfig};
pub use request::IncomingRequest;
pub use response::{GatewayResponse, INTERNAL_ERROR_BODY, MISSING_TEXT_BODY};
