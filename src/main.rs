use lamedh_runtime::{handler_fn, run, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();
    run(handler_fn(serverless_hello::handler)).await?;
    Ok(())
}
