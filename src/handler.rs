use std::env;

use lamedh_runtime::{Context, Error};
use serde_json::Value;
use tracing::info;

use crate::greeting;
use crate::response::{ApiGatewayResponse, Response};

/// Handles a single invocation: greets the event's `body` value and echoes
/// the event back inside an API Gateway proxy response.
///
/// An event without a `body` key is an invocation error; the runtime
/// reports it to the platform rather than answering with a degraded
/// greeting.
pub async fn handler(event: Value, _context: Context) -> Result<ApiGatewayResponse, Error> {
    info!(
        "MY_VAR={}",
        env::var("MY_VAR").unwrap_or_else(|_| "null".to_string())
    );
    info!("received: {}", event);

    let body = event
        .get("body")
        .ok_or("event has no body attribute")?;
    let message = greeting::greet(body);

    let response_body = Response {
        message,
        input: event,
    };
    let response = ApiGatewayResponse::builder()
        .status_code(200)
        .header("X-Powered-By", "AWS Lambda & serverless")
        .object_body(&response_body)
        .build()?;
    Ok(response)
}
