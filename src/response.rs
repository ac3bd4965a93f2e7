//! Response types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body handed back to the caller: the greeting paired with the event that
/// produced it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Response {
    /// The formatted greeting.
    pub message: String,
    /// The original event, echoed back verbatim.
    pub input: Value,
}

/// API Gateway proxy integration response.
///
/// The `body` holds an already-serialized payload; API Gateway forwards it
/// to the HTTP client as-is. `isBase64Encoded` only appears on the wire for
/// binary bodies.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    #[serde(skip_serializing_if = "is_false")]
    pub is_base64_encoded: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl ApiGatewayResponse {
    /// Creates a new builder-style object to construct a response
    pub fn builder() -> Builder {
        Builder::default()
    }
}

/// An `ApiGatewayResponse` builder
///
/// Body serialization failures are deferred and surfaced by
/// [`Builder::build`], in the manner of `http::response::Builder`.
#[derive(Debug)]
pub struct Builder {
    status_code: u16,
    headers: HashMap<String, String>,
    body: Result<String, serde_json::Error>,
    is_base64_encoded: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            status_code: 200,
            headers: HashMap::new(),
            body: Ok(String::new()),
            is_base64_encoded: false,
        }
    }
}

impl Builder {
    /// Sets the HTTP status code of the response.
    pub fn status_code(mut self, status_code: u16) -> Self {
        self.status_code = status_code;
        self
    }

    /// Appends a header to the response.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets a raw string body, replacing any previously set body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Ok(body.into());
        self.is_base64_encoded = false;
        self
    }

    /// Serializes `body` to JSON and uses the result as the response body.
    pub fn object_body<T>(mut self, body: &T) -> Self
    where
        T: Serialize,
    {
        self.body = serde_json::to_string(body);
        self.is_base64_encoded = false;
        self
    }

    /// Sets a binary body, base64-encoded for transport through API Gateway.
    pub fn binary_body(mut self, body: &[u8]) -> Self {
        self.body = Ok(base64::encode(body));
        self.is_base64_encoded = true;
        self
    }

    /// Consumes the builder, producing the response.
    pub fn build(self) -> Result<ApiGatewayResponse, serde_json::Error> {
        let body = self.body?;
        Ok(ApiGatewayResponse {
            status_code: self.status_code,
            headers: self.headers,
            body,
            is_base64_encoded: self.is_base64_encoded,
        })
    }
}
