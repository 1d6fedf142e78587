/**
 * Relay Server Entry Point
 *
 * Loads configuration, installs tracing, and serves the sync WebSocket plus
 * the built web client on a single port.
 */

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("[Startup] Server initialization started");

    let config = warroom::backend::server::ServerConfig::load()?;
    tracing::info!("[Startup] Serving static files from {}", config.static_dir.display());

    warroom::backend::server::run(config).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    eprintln!("Server requires the 'server' feature to be enabled.");
    eprintln!("Run with: cargo run --bin warroom-server --features server");
    std::process::exit(1);
}
