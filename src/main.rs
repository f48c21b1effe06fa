use dashpulse::Server;
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dashpulse=info")),
        )
        .init();

    let port: u16 = env::var("DASHPULSE_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3131);

    let server = Server::new(Some(port.to_string()));

    info!(port, "starting panel stats service");

    server.run().await?;

    Ok(())
}
