use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_parser::config::Config;
use resume_parser::pipeline::ResumeParser;
use resume_parser::ranking::MatchScorer;
use resume_parser::routes::{build_router, cors_layer};
use resume_parser::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("resume_parser={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume parser v{}", env!("CARGO_PKG_VERSION"));

    let parser_config = config
        .parser_config()
        .context("Failed to build parser configuration")?;
    match &config.vocabulary_path {
        Some(path) => info!("Vocabulary loaded from {}", path.display()),
        None => info!("Using built-in vocabulary"),
    }
    info!(
        "Reference year {}, skill matching {:?}",
        parser_config.reference_year, parser_config.vocabulary.skill_match
    );

    let parser = Arc::new(ResumeParser::new(&parser_config)?);

    let state = AppState {
        config: config.clone(),
        parser,
        scorer: MatchScorer::default(),
    };

    if config.allowed_origins.is_empty() {
        info!("CORS: any origin");
    } else {
        info!("CORS: {}", config.allowed_origins.join(", "));
    }
    let cors = cors_layer(&config.allowed_origins).context("Invalid RESUME_ALLOWED_ORIGINS")?;

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
