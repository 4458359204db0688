use sqlx::PgPool;

use crate::config::Config;
use crate::skills::pipeline::SkillMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Match history. `None` when DATABASE_URL is unset.
    pub db: Option<PgPool>,
    /// Dictionary extractor + enricher + classifier, wired once at startup.
    pub matcher: SkillMatcher,
    pub config: Config,
}
