use crate::app::build_info::BuildInfo;
use crate::core::engine::PassphraseEngine;
use crate::domain::model::{GenerationOptions, GenerationRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<PassphraseEngine>,
    pub build: BuildInfo,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(engine: PassphraseEngine) -> Self {
        Self {
            engine: Arc::new(engine),
            build: BuildInfo::current(),
            started_at: Instant::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateBody {
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(flatten)]
    pub options: GenerationOptions,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub passphrases: Vec<String>,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub build: BuildInfo,
    pub uptime: f64,
}

fn error_response(status: StatusCode, error: &'static str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error,
            success: false,
        }),
    )
        .into_response()
}

/// POST /api/generate-passphrases
///
/// Remote path only: failures become a generic 500 and the caller decides
/// whether to fall back. Details stay in the server log.
pub async fn generate_passphrases(
    State(state): State<AppState>,
    body: std::result::Result<Json<GenerateBody>, JsonRejection>,
) -> Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::warn!("Rejected request body: {}", rejection.body_text());
            return error_response(StatusCode::BAD_REQUEST, "Keywords are required");
        }
    };

    let request = match GenerationRequest::new(body.keywords.as_deref().unwrap_or_default(), body.options) {
        Ok(request) => request,
        Err(_) => return error_response(StatusCode::BAD_REQUEST, "Keywords are required"),
    };

    match state.engine.generate(&request).await {
        Ok(passphrases) => {
            tracing::info!(
                "✅ Generated {} passphrases for '{}'",
                passphrases.len(),
                request.keywords()
            );
            (
                StatusCode::OK,
                Json(GenerateResponse {
                    passphrases,
                    success: true,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(
                "❌ Error generating passphrases: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate passphrases")
        }
    }
}

/// 非預檢的 OPTIONS 請求
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now().to_rfc3339(),
        build: state.build.clone(),
        uptime: state.started_at.elapsed().as_secs_f64(),
    })
}
