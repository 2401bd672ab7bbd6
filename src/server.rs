use crate::relay::PromptRelay;
use crate::Error;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Request body for `POST /generate`.
///
/// `prompt` is optional at the wire level so that a missing field is reported
/// as invalid input rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: Option<String>,
}

/// Success body for `POST /generate`.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub text: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::Upstream(_) | Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}

/// Build the application router.
pub fn router(relay: PromptRelay) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/generate", post(generate))
        .with_state(relay)
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn generate(
    State(relay): State<PromptRelay>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, Error> {
    let Json(request) = payload.map_err(|rejection| {
        Error::invalid_input(format!("invalid request body: {}", rejection.body_text()))
    })?;

    match relay.generate(request.prompt.as_deref()).await {
        Ok(text) => Ok(Json(GenerateResponse { text })),
        Err(err) => {
            tracing::error!(error = %err, "prompt generation failed");
            Err(err)
        }
    }
}
