use anyhow::Context;
use reviews_server::{build_router, config, store, AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reviews_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = config::Settings::new().context("Failed to load settings")?;

    // Seed the store once; after this it only grows through POST
    let seed = store::load_seed(&settings.store.seed_path)?;
    let state = AppState::with_analyzer(
        store::ReviewStore::with_reviews(seed),
        settings.sentiment.analyzer.build(),
    );
    if state.store.is_empty() {
        tracing::warn!("Review store is empty; GET / returns [] until reviews are posted");
    } else {
        tracing::info!("Review store ready with {} reviews", state.store.len());
    }
    tracing::info!("Scoring with the {:?} sentiment analyzer", settings.sentiment.analyzer);

    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Failed to parse server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
