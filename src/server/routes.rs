//! HTTP route handlers for the session board API.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use crate::board::{BoardSnapshot, PRESETS, Preset, PresetError, SessionBoard};
use crate::qotd::QotdError;

use super::state::AppState;

/// Create the API router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/qotd", get(question_of_the_day))
        .route("/api/board", get(board_snapshot))
        .route("/api/presets", get(list_presets))
        .route("/api/presets/{preset}/stages/{stage}", post(apply_preset_stage))
        .fallback_service(static_files)
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "session-board",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

impl IntoResponse for QotdError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingParams => (StatusCode::BAD_REQUEST, self.to_string()).into_response(),
            other => {
                tracing::error!("Question generation failed: {other}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl IntoResponse for PresetError {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, self.to_string()).into_response()
    }
}

/// Question-of-the-day query string.
#[derive(Debug, Default, Deserialize)]
pub struct QotdQuery {
    /// Where the session takes place.
    pub location: Option<String>,
    /// Date of the session.
    pub date: Option<String>,
}

/// Generate ice-breaker questions; responds with the model's JSON verbatim.
async fn question_of_the_day(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QotdQuery>,
) -> Result<Response, QotdError> {
    let location = query.location.unwrap_or_default();
    let date = query.date.unwrap_or_default();

    let content = state.qotd.generate(&location, &date).await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], content).into_response())
}

/// Board hash carried in the query string.
#[derive(Debug, Default, Deserialize)]
pub struct HashQuery {
    /// Hash fragment, with or without the leading `#`.
    #[serde(default)]
    pub hash: String,
}

/// Decode a board hash into its cooked values.
async fn board_snapshot(Query(query): Query<HashQuery>) -> Json<BoardSnapshot> {
    Json(SessionBoard::from_hash(&query.hash).snapshot())
}

/// Preset summary.
#[derive(Debug, Serialize)]
pub struct PresetDto {
    /// Preset name.
    pub name: &'static str,
    /// Stage names in running order.
    pub stages: Vec<&'static str>,
}

impl From<&Preset> for PresetDto {
    fn from(preset: &Preset) -> Self {
        Self {
            name: preset.name,
            stages: preset.stages.iter().map(|stage| stage.name).collect(),
        }
    }
}

/// List the built-in presets.
async fn list_presets() -> Json<Vec<PresetDto>> {
    Json(PRESETS.iter().map(PresetDto::from).collect())
}

/// Result of applying a stage.
#[derive(Debug, Serialize)]
pub struct AppliedStage {
    /// New hash fragment.
    pub hash: String,
    /// Cooked values after the stage.
    pub board: BoardSnapshot,
}

/// Apply a preset stage to the board in the query string.
async fn apply_preset_stage(
    Path((preset, stage)): Path<(String, String)>,
    Query(query): Query<HashQuery>,
) -> Result<Json<AppliedStage>, PresetError> {
    let mut board = SessionBoard::from_hash(&query.hash);
    crate::board::apply_stage(&mut board, &preset, &stage, chrono::Local::now().time())?;

    Ok(Json(AppliedStage {
        hash: board.to_hash(),
        board: board.snapshot(),
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::qotd::{QotdResult, QotdService, QuestionModel};
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use std::path::PathBuf;
    use tower::ServiceExt;

    /// Model that honours the schema with fifteen questions.
    struct FifteenQuestions;

    #[async_trait]
    impl QuestionModel for FifteenQuestions {
        async fn complete(&self, prompt: &str) -> QotdResult<String> {
            assert!(prompt.contains("Location: Vancouver"));
            let questions: Vec<String> = (1..=15).map(|i| format!("Question {i}?")).collect();
            Ok(serde_json::json!({ "questions": questions }).to_string())
        }
    }

    struct FailingModel;

    #[async_trait]
    impl QuestionModel for FailingModel {
        async fn complete(&self, _prompt: &str) -> QotdResult<String> {
            Err(QotdError::EmptyResponse)
        }
    }

    fn app(model: Arc<dyn QuestionModel>) -> Router {
        let state = AppState::with_service(QotdService::new(model), PathBuf::from("static"));
        create_router(state)
    }

    async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Option<String>, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn test_qotd_returns_model_json() {
        let (status, content_type, body) = send(
            app(Arc::new(FifteenQuestions)),
            "GET",
            "/api/qotd?location=Vancouver&date=2024-01-01",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let questions = json["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 15);
        assert!(questions.iter().all(serde_json::Value::is_string));
    }

    #[tokio::test]
    async fn test_qotd_missing_location() {
        let (status, _, body) =
            send(app(Arc::new(FifteenQuestions)), "GET", "/api/qotd?date=2024-01-01").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Missing location or date");
    }

    #[tokio::test]
    async fn test_qotd_missing_date() {
        let (status, _, body) =
            send(app(Arc::new(FifteenQuestions)), "GET", "/api/qotd?location=Vancouver").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Missing location or date");
    }

    #[tokio::test]
    async fn test_qotd_upstream_failure_is_500() {
        let (status, _, _) = send(
            app(Arc::new(FailingModel)),
            "GET",
            "/api/qotd?location=Vancouver&date=2024-01-01",
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_health() {
        let (status, _, body) = send(app(Arc::new(FailingModel)), "GET", "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("session-board"));
    }

    #[tokio::test]
    async fn test_board_snapshot() {
        let (status, _, body) = send(
            app(Arc::new(FailingModel)),
            "GET",
            "/api/board?hash=%23mainContentState%3Dtext%26centerText%3DHi",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["mainContentState"], "text");
        assert_eq!(json["centerText"], "Hi");
        assert_eq!(json["countdownTitle"], "Break Starts");
    }

    #[tokio::test]
    async fn test_list_presets() {
        let (status, _, body) = send(app(Arc::new(FailingModel)), "GET", "/api/presets").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json[0]["name"], "UBC AI Safety");
        assert_eq!(json[0]["stages"][0], "welcome");
        assert_eq!(json[0]["stages"].as_array().map(Vec::len), Some(7));
    }

    #[tokio::test]
    async fn test_apply_stage() {
        let (status, _, body) = send(
            app(Arc::new(FailingModel)),
            "POST",
            "/api/presets/UBC%20AI%20Safety/stages/demos?hash=qotd%3DHello",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["board"]["mainContentState"], "text");
        assert_eq!(json["board"]["centerText"], "Gather around for demos!");
        assert_eq!(json["board"]["qotd"], "Hello");
        assert_eq!(json["board"]["presetStage"], "demos");
        assert!(json["hash"].as_str().unwrap().contains("presetStage=demos"));
    }

    #[tokio::test]
    async fn test_apply_unknown_stage() {
        let (status, _, _) = send(
            app(Arc::new(FailingModel)),
            "POST",
            "/api/presets/UBC%20AI%20Safety/stages/lunch",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
