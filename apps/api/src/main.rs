mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod pdf;
mod routes;
mod skills;
mod state;

use anyhow::{Context, Result};
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, fetch_secret};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::skills::classifier::{FallbackClassifier, LlmSkillClassifier, SkillClassifier};
use crate::skills::dictionary::SkillDictionary;
use crate::skills::enrichment::{LlmSkillEnricher, NoopEnricher, SkillEnricher};
use crate::skills::extractor::DictionaryExtractor;
use crate::skills::pipeline::SkillMatcher;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillMatch API v{}", env!("CARGO_PKG_VERSION"));

    // PostgreSQL is optional: match history and the secrets table live there
    let db = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;
            Some(pool)
        }
        None => {
            info!("DATABASE_URL not set, match history disabled");
            None
        }
    };

    let dictionary = Arc::new(SkillDictionary::builtin());
    if dictionary.is_empty() {
        anyhow::bail!("Skill dictionary is empty; refusing to start");
    }
    info!(
        "Skill dictionary loaded: {} skills in {} categories",
        dictionary.len(),
        dictionary.category_count()
    );
    let extractor = DictionaryExtractor::new(dictionary)
        .context("Failed to compile skill dictionary patterns")?;

    let (enricher, classifier) = build_llm_backends(&config, db.as_ref()).await?;
    info!(
        "Skill backends: enricher={}, classifier={}",
        enricher.backend(),
        classifier.backend()
    );

    let matcher = SkillMatcher::new(Arc::new(extractor), enricher, classifier);

    let state = AppState {
        db,
        matcher,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Picks the LLM-backed enricher and classifier when a key is available and
/// enrichment is enabled, otherwise the dictionary-only implementations.
async fn build_llm_backends(
    config: &Config,
    db: Option<&PgPool>,
) -> Result<(Arc<dyn SkillEnricher>, Arc<dyn SkillClassifier>)> {
    if !config.enable_llm_enrichment {
        info!("LLM enrichment disabled by ENABLE_LLM_ENRICHMENT");
        return Ok((Arc::new(NoopEnricher), Arc::new(FallbackClassifier)));
    }

    let Some(api_key) = resolve_api_key(config, db).await else {
        warn!("No GEMINI_API_KEY found, running on the skill dictionary alone");
        return Ok((Arc::new(NoopEnricher), Arc::new(FallbackClassifier)));
    };

    let mut llm = LlmClient::new(api_key, Duration::from_secs(config.llm_timeout_secs))
        .context("Failed to build LLM HTTP client")?;
    if let Some(base_url) = &config.gemini_api_base {
        info!("Using Gemini endpoint override: {base_url}");
        llm = llm.with_base_url(base_url.as_str());
    }
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    Ok((
        Arc::new(LlmSkillEnricher(llm.clone())),
        Arc::new(LlmSkillClassifier(llm)),
    ))
}

/// Environment first, then the `secrets` table.
async fn resolve_api_key(config: &Config, db: Option<&PgPool>) -> Option<String> {
    if let Some(key) = &config.gemini_api_key {
        return Some(key.clone());
    }
    let pool = db?;
    match fetch_secret(pool, "GEMINI_API_KEY").await {
        Ok(key) => key.filter(|k| !k.trim().is_empty()),
        Err(e) => {
            warn!("Could not read GEMINI_API_KEY from secrets table: {e}");
            None
        }
    }
}
