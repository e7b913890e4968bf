//! HTTP routes and handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use reviewcheck_classifiers::Prediction;
use reviewcheck_core::{ClassificationResult, Error, Review};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/ping", get(ping))
        .route("/debug_model", get(debug_model))
        .route("/predict", post(predict))
        .route("/analyze_text", post(analyze_text))
        .route("/analyze_batch", post(analyze_batch))
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .nest("/api", api)
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn metrics(State(state): State<AppState>) -> String {
    state
        .metrics_handle
        .as_ref()
        .map(|handle| handle.render())
        .unwrap_or_default()
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Single review as posted by clients
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReviewRequest {
    pub text: String,
    pub place: Option<String>,
    pub user: Option<String>,
    pub timestamp: Option<String>,
}

impl From<ReviewRequest> for Review {
    fn from(req: ReviewRequest) -> Self {
        Review {
            id: 1,
            text: req.text,
            place: req.place,
            user: req.user,
            timestamp: req.timestamp,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BatchRequest {
    pub rows: Vec<ReviewRequest>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub results: Vec<ClassificationResult>,
}

#[derive(Debug, Serialize)]
struct PingResponse {
    ok: bool,
    timestamp: i64,
    model_loaded: bool,
    decision_method: &'static str,
    engine: &'static str,
}

async fn ping(State(state): State<AppState>) -> Result<Json<PingResponse>, AppError> {
    ensure_model(&state)?;

    let engine = state.engine();
    Ok(Json(PingResponse {
        ok: true,
        timestamp: chrono::Utc::now().timestamp(),
        model_loaded: state.model.is_loaded(),
        decision_method: engine.decision_method(),
        engine: engine.as_str(),
    }))
}

async fn debug_model(State(state): State<AppState>) -> Json<serde_json::Value> {
    let diagnostics = state.model.diagnostics();
    let current_dir = std::env::current_dir()
        .map(|dir| dir.display().to_string())
        .unwrap_or_default();

    Json(json!({
        "paths_checked": diagnostics.candidates,
        "last_error": diagnostics.last_error,
        "current_dir": current_dir,
        "loaded_from": state.model.loaded_from().map(|p| p.display().to_string()),
        "model_loaded": state.model.is_loaded(),
        "decision_method": state.engine().decision_method(),
        "engine": state.engine().as_str(),
    }))
}

/// Raw model prediction, regardless of the configured engine
async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<ReviewRequest>, JsonRejection>,
) -> Result<Json<Prediction>, AppError> {
    state.model.artifact()?;
    let req = review_payload(payload)?;
    let prediction = state.predictor().predict(&req.text)?;
    debug!(label = %prediction.label, top = prediction.top_prob, "Raw prediction");
    Ok(Json(prediction))
}

async fn analyze_text(
    State(state): State<AppState>,
    payload: Result<Json<ReviewRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    ensure_model(&state)?;
    let req = review_payload(payload)?;

    let result = state.classifier.analyze(&Review::from(req))?;
    Ok(Json(AnalyzeResponse {
        results: vec![result],
    }))
}

async fn analyze_batch(
    State(state): State<AppState>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    ensure_model(&state)?;
    let Json(req) =
        payload.map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;

    let rows: Vec<Review> = req.rows.into_iter().map(Review::from).collect();
    let classifier = state.classifier.clone();
    let results = tokio::task::spawn_blocking(move || classifier.analyze_batch(&rows))
        .await
        .map_err(|e| Error::internal(format!("batch worker failed: {e}")))??;

    debug!(results = results.len(), "Batch analyzed");
    Ok(Json(AnalyzeResponse { results }))
}

/// Model-backed requests fail fast when no artifact was loaded
fn ensure_model(state: &AppState) -> Result<(), AppError> {
    if state.requires_model() {
        state.model.artifact()?;
    }
    Ok(())
}

/// A body that is not a JSON object with a string `text` carries no text
fn review_payload(
    payload: Result<Json<ReviewRequest>, JsonRejection>,
) -> Result<ReviewRequest, AppError> {
    match payload {
        Ok(Json(req)) => Ok(req),
        Err(rejection) => {
            debug!(rejection = %rejection.body_text(), "Unreadable review body");
            Err(Error::EmptyText.into())
        }
    }
}

/// Error handling
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Classification(#[from] Error),

    /// Request body could not be read
    #[error("{0}")]
    InvalidRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Classification(Error::EmptyText) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Provide non-empty 'text' field" }),
            ),
            AppError::Classification(Error::ModelUnavailable(diagnostics)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Model not loaded. Set MODEL_PATH or place rf_model_pipeline.json next to the config file.",
                    "checked_paths": diagnostics.candidates,
                    "last_error": diagnostics.last_error,
                }),
            ),
            AppError::Classification(Error::Config(msg)) => {
                (StatusCode::BAD_REQUEST, json!({ "error": msg }))
            }
            AppError::Classification(e) => {
                error!(error = %e, "Classification failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": e.to_string() }),
                )
            }
            AppError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, json!({ "error": msg }))
            }
        };

        (status, Json(body)).into_response()
    }
}
