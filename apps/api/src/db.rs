use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::match_record::MatchRecord;
use crate::skills::scoring::MatchResult;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Reads one value from the `secrets` key/value table.
pub async fn fetch_secret(pool: &PgPool, key: &str) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT value FROM secrets WHERE key = $1")
        .bind(key)
        .fetch_optional(pool)
        .await
}

/// Appends a match to the history table and returns its id.
pub async fn insert_match(pool: &PgPool, result: &MatchResult) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO matches (id, score, matched_skills, missing_skills, suggestions)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(id)
    .bind(result.score)
    .bind(&result.matched_skills)
    .bind(&result.missing_skills)
    .bind(&result.suggestions)
    .execute(pool)
    .await?;

    Ok(id)
}

pub async fn get_match(pool: &PgPool, id: Uuid) -> Result<Option<MatchRecord>, sqlx::Error> {
    sqlx::query_as::<_, MatchRecord>("SELECT * FROM matches WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
