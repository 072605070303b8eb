use std::error::Error;
use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activity_signup::config::ServerConfig;
use activity_signup::web;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Config + activity roster
    let config = ServerConfig::from_env()?;
    let directory = Arc::new(activity_signup::load_directory(&config)?);
    info!(
        activities = directory.len(),
        static_dir = %config.static_dir.display(),
        "activity directory loaded"
    );

    // 3. Router
    let app = web::build_router(directory, &config.static_dir);

    // 4. Bind, falling back to the next port once
    let listener = match tokio::net::TcpListener::bind(config.bind_addr()).await {
        Ok(l) => l,
        Err(e) => {
            warn!(
                "could not bind {}: {}; trying {}",
                config.bind_addr(),
                e,
                config.fallback_bind_addr()
            );
            tokio::net::TcpListener::bind(config.fallback_bind_addr()).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("server listening on http://{}", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
