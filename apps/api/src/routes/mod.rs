pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::skills::handlers;
use crate::state::AppState;

/// Résumé PDFs routinely exceed axum's 2 MB default.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/calculate-match", post(handlers::handle_calculate_match))
        .route("/api/v1/match", post(handlers::handle_match))
        .route("/api/v1/matches/:id", get(handlers::handle_get_match))
        .route("/api/v1/skills", get(handlers::handle_list_skills))
        .route("/api/v1/skills/:skill", get(handlers::handle_get_skill))
        .route("/api/v1/skills/extract", post(handlers::handle_extract_skills))
        .route("/api/v1/skills/classify", post(handlers::handle_classify))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::skills::classifier::FallbackClassifier;
    use crate::skills::enrichment::NoopEnricher;
    use crate::skills::extractor::shared_builtin;
    use crate::skills::pipeline::SkillMatcher;

    fn app() -> Router {
        build_router(AppState {
            db: None,
            matcher: SkillMatcher::new(
                shared_builtin(),
                Arc::new(NoopEnricher),
                Arc::new(FallbackClassifier),
            ),
            config: Config {
                min_text_chars: 10,
                ..Config::default()
            },
        })
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_match_route_returns_flat_result() {
        let payload = serde_json::json!({
            "resume_text": "PostgreSQL and MySQL administrator, some Python scripting",
            "job_description": "Required: PostgreSQL, MySQL. Bonus: Python."
        });
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/match")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["score"], 100.0);
        assert_eq!(
            body["matched_skills"],
            serde_json::json!(["mysql", "postgresql", "python"])
        );
        assert_eq!(body["missing_skills"], serde_json::json!([]));
        assert!(body["suggestions"].is_array());
    }

    #[tokio::test]
    async fn test_match_route_rejects_short_text_with_error_body() {
        let payload = serde_json::json!({
            "resume_text": "Rust",
            "job_description": "Required: PostgreSQL, MySQL. Bonus: Python."
        });
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/match")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_calculate_match_requires_file() {
        let body = "--XBOUNDARY\r\n\
            Content-Disposition: form-data; name=\"job_description\"\r\n\r\n\
            Required: Python, SQL and Docker experience.\r\n\
            --XBOUNDARY--\r\n";
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/calculate-match")
                    .header(
                        header::CONTENT_TYPE,
                        "multipart/form-data; boundary=XBOUNDARY",
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "file is required");
    }

    #[tokio::test]
    async fn test_skill_lookup_route() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/skills/postgres")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["skill"], "postgresql");
        assert_eq!(body["category"], "database");
    }

    #[tokio::test]
    async fn test_get_match_without_database_is_503() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/matches/6f1c2a3e-8a0b-4c1d-9e2f-0a1b2c3d4e5f")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
