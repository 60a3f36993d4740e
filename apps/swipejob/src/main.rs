use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use swipejob::config::Config;
use swipejob::routes::build_router;
use swipejob::search_client::sample::SampleSearch;
use swipejob::search_client::{HttpSearchClient, SearchCollaborator};
use swipejob::state::AppState;
use swipejob::view::session::SessionStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unparseable values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SwipeJob v{}", env!("CARGO_PKG_VERSION"));

    // Initialize search collaborator
    let search: Arc<dyn SearchCollaborator> = if config.local_testing {
        info!("Local testing enabled: serving sample postings");
        Arc::new(SampleSearch)
    } else {
        let client = HttpSearchClient::new(config.search_api_url.clone())?;
        info!("Search client initialized (endpoint: {})", client.endpoint());
        Arc::new(client)
    };

    info!(
        "Skill catalog: {} skills, response ordering: {:?}",
        config.skills.len(),
        config.response_ordering
    );

    // Build app state
    let state = AppState {
        skills: config.skills.clone(),
        search,
        config: config.clone(),
        sessions: SessionStore::default(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
