//! Axum route handlers for the matching API.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::db::{get_match, insert_match};
use crate::errors::AppError;
use crate::models::match_record::MatchRecord;
use crate::pdf::{extract_text_from_pdf, require_min_text};
use crate::skills::classifier::ClassifiedSkills;
use crate::skills::normalizer::normalize_terms;
use crate::skills::scoring::MatchResult;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub skills: Vec<String>,
    pub backend: String,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub job_description: String,
    /// Skills to classify. Extracted from `job_description` when omitted.
    #[serde(default)]
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub classified: ClassifiedSkills,
    pub backend: String,
}

#[derive(Debug, Serialize)]
pub struct SkillResponse {
    pub skill: String,
    pub category: Option<String>,
    pub synonyms: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct VocabularyResponse {
    pub skill_count: usize,
    pub category_count: usize,
    /// Every surface form the extractor searches for.
    pub terms: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/calculate-match
///
/// Multipart upload: `file` (résumé PDF) + `job_description` (text).
pub async fn handle_calculate_match(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchResult>, AppError> {
    let mut file: Option<Bytes> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                file = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Could not read uploaded file: {e}"))
                })?);
            }
            Some("job_description") => {
                job_description = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("Could not read job_description: {e}"))
                })?);
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| AppError::Validation("file is required".to_string()))?;
    let job_description = job_description
        .ok_or_else(|| AppError::Validation("job_description is required".to_string()))?;
    require_min_text("job_description", &job_description, state.config.min_text_chars)?;

    let resume_text = extract_text_from_pdf(file).await?;
    require_min_text("resume", &resume_text, state.config.min_text_chars)?;

    let result = state.matcher.match_texts(&resume_text, &job_description).await;
    record_match(&state, &result).await;

    Ok(Json(result))
}

/// POST /api/v1/match
///
/// Same as `/api/calculate-match` for callers that already have the résumé as text.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResult>, AppError> {
    require_min_text("resume_text", &request.resume_text, state.config.min_text_chars)?;
    require_min_text(
        "job_description",
        &request.job_description,
        state.config.min_text_chars,
    )?;

    let result = state
        .matcher
        .match_texts(&request.resume_text, &request.job_description)
        .await;
    record_match(&state, &result).await;

    Ok(Json(result))
}

/// POST /api/v1/skills/extract
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    require_min_text("text", &request.text, 1)?;

    let skills = state.matcher.extract_skills(&request.text).await;

    Ok(Json(ExtractResponse {
        skills: skills.into_iter().collect(),
        backend: state.matcher.enricher_backend().to_string(),
    }))
}

/// POST /api/v1/skills/classify
pub async fn handle_classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    require_min_text("job_description", &request.job_description, 1)?;

    let skills = match &request.skills {
        Some(raw) => normalize_terms(state.matcher.dictionary(), raw),
        None => state.matcher.extract_skills(&request.job_description).await,
    };
    let classified = state
        .matcher
        .classify(&request.job_description, &skills)
        .await;

    Ok(Json(ClassifyResponse {
        classified,
        backend: state.matcher.classifier_backend().to_string(),
    }))
}

/// GET /api/v1/skills
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<VocabularyResponse> {
    let dictionary = state.matcher.dictionary();
    Json(VocabularyResponse {
        skill_count: dictionary.len(),
        category_count: dictionary.category_count(),
        terms: dictionary.all_skills().into_iter().map(str::to_string).collect(),
    })
}

/// GET /api/v1/skills/:skill
///
/// Accepts a canonical id or any synonym.
pub async fn handle_get_skill(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<Json<SkillResponse>, AppError> {
    let dictionary = state.matcher.dictionary();
    let skill = dictionary
        .find_standard_skill(&term)
        .ok_or_else(|| AppError::NotFound(format!("Unknown skill '{term}'")))?;

    Ok(Json(SkillResponse {
        skill: skill.to_string(),
        category: dictionary.category_of(skill).map(str::to_string),
        synonyms: dictionary.synonyms_of(skill).to_vec(),
    }))
}

/// GET /api/v1/matches/:id
pub async fn handle_get_match(
    State(state): State<AppState>,
    Path(match_id): Path<Uuid>,
) -> Result<Json<MatchRecord>, AppError> {
    let db = state
        .db
        .as_ref()
        .ok_or_else(|| AppError::ServiceUnavailable("Match history is not configured".to_string()))?;

    let record = get_match(db, match_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Match {match_id} not found")))?;

    Ok(Json(record))
}

/// Stores the result when a database is configured. Failures are logged, never returned.
async fn record_match(state: &AppState, result: &MatchResult) {
    let Some(db) = &state.db else {
        return;
    };
    match insert_match(db, result).await {
        Ok(id) => info!("Stored match {id} (score {})", result.score),
        Err(e) => warn!("Failed to store match result: {e}"),
    }
}
