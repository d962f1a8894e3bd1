use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mergington::web::{self, AppState};
use mergington::{ActivityRegistry, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Optional .env next to the binary
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    // 2. Config + registry
    let config = AppConfig::from_env()?;
    let registry = ActivityRegistry::seeded();
    info!(
        activities = registry.activity_names().len(),
        static_dir = %config.static_dir.display(),
        "activity registry seeded"
    );

    // 3. Router
    let app = web::router(AppState::new(registry), &config.static_dir);

    // 4. Listener, with one fallback port
    let addr = config.bind_addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("cannot bind {} or {}", addr, fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Server listening on http://{}", bound_addr);
    info!("Open http://{}/ for the sign-up page", bound_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
