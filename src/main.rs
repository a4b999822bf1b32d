use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tutorboard::api::router;
use tutorboard::services::{AuthConfig, AuthService, CatalogService};
use tutorboard::source::MockLessonSource;
use tutorboard::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "tutorboard=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let source = Arc::new(MockLessonSource::seeded());
    let catalog = Arc::new(CatalogService::new(source));
    let auth = Arc::new(AuthService::new(AuthConfig::from_env()));

    if let Err(err) = catalog.load().await {
        warn!("initial lesson load failed: {}; reload via POST /lessons/reload", err);
    }

    let state = AppState { catalog, auth };
    let app = router(state);

    let addr: SocketAddr = std::env::var("LISTEN_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()?;
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
