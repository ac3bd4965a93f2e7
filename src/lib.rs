//! A hello-greeting Lambda function fronted by API Gateway.
//!
//! The function receives a schema-less JSON event, wraps the event's `body`
//! value in a fixed greeting template, and answers with an API Gateway
//! proxy response that echoes the original event back to the caller.
//!
//! ```rust,no_run
//! use lamedh_runtime::{handler_fn, run, Error};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     run(handler_fn(serverless_hello::handler)).await?;
//!     Ok(())
//! }
//! ```
pub mod greeting;
pub mod response;

mod handler;

pub use handler::handler;
pub use lamedh_runtime::{Context, Error};
