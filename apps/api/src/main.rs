mod analysis;
mod catalog;
mod config;
mod errors;
mod models;
mod routes;
mod scoring;
mod state;
mod storage;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::SkillCatalog;
use crate::config::{AllowedOrigins, Config};
use crate::routes::build_router;
use crate::scoring::{ScoringConfig, ScoringEngine, SynonymTable};
use crate::state::AppState;
use crate::storage::JsonFileStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CVision API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = match &config.roles_path {
        Some(path) => SkillCatalog::from_json_file(path)
            .with_context(|| format!("Failed to load roles from {}", path.display()))?,
        None => SkillCatalog::builtin(),
    };
    info!("Skill catalog loaded ({} roles)", catalog.role_count());

    let synonyms = match &config.synonyms_path {
        Some(path) => SynonymTable::from_json_file(path)
            .with_context(|| format!("Failed to load synonyms from {}", path.display()))?,
        None => SynonymTable::builtin(),
    };

    let scoring_config = ScoringConfig::for_profile(config.scoring_profile, config.section_set);
    info!(
        "Scoring profile: {:?}, sections: {:?}, {} synonym entries",
        config.scoring_profile,
        config.section_set,
        synonyms.len()
    );
    let scorer = Arc::new(ScoringEngine::new(scoring_config, synonyms));

    let store = JsonFileStore::open(&config.analyses_path)
        .await
        .with_context(|| {
            format!(
                "Failed to open analyses store at {}",
                config.analyses_path.display()
            )
        })?;

    let cors = build_cors_layer(&config.allowed_origins)?;

    let state = AppState {
        config: config.clone(),
        catalog: Arc::new(catalog),
        scorer,
        store: Arc::new(store),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_cors_layer(origins: &AllowedOrigins) -> Result<CorsLayer> {
    match origins {
        AllowedOrigins::Any => Ok(CorsLayer::permissive()),
        AllowedOrigins::List(list) => {
            let origins = list
                .iter()
                .map(|o| {
                    o.parse::<HeaderValue>()
                        .with_context(|| format!("Invalid CORS origin '{o}'"))
                })
                .collect::<Result<Vec<_>>>()?;
            info!("CORS restricted to {} origin(s)", origins.len());
            Ok(CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any))
        }
    }
}
