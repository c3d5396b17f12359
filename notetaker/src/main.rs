use anyhow::Result;

use notetaker::log_buffer::LogBuffer;
use notetaker::logging::init_logging_with_buffer;
use notetaker::router::Route;
use notetaker::App;

#[tokio::main]
async fn main() -> Result<()> {
    // Optional start route, e.g. `notetaker /note/665f1c2ab3e4`
    let route = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<Route>())
        .transpose()?;

    let log_buffer = LogBuffer::default();
    let log_path = init_logging_with_buffer(log_buffer.clone())?;
    tracing::info!("Logging to {}", log_path.display());

    let session = notetaker_auth::init()?;

    App::new(session, log_buffer).with_route(route).run().await?;

    Ok(())
}
