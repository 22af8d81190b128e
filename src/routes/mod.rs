use crate::error::AppError;
use crate::generator::Generator;
use axum::{
    Router,
    body::Bytes,
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

mod assessment;
mod chat;
mod guide;
mod health;

#[derive(Clone, Default)]
pub struct AppState {
    generator: Option<Arc<dyn Generator>>,
}

impl AppState {
    pub fn new(generator: Option<Arc<dyn Generator>>) -> Self {
        Self { generator }
    }

    pub fn demo() -> Self {
        Self::default()
    }

    pub fn live(generator: Arc<dyn Generator>) -> Self {
        Self::new(Some(generator))
    }

    /// The backend to call, or `None` in demo mode.
    pub fn generator(&self) -> Option<&Arc<dyn Generator>> {
        self.generator.as_ref()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/chat-how-to", post(chat::chat_how_to))
        .route("/api/chat-plan", post(chat::chat_plan))
        .route(
            "/api/generate-assessment-plan",
            post(assessment::generate_assessment_plan),
        )
        .route("/api/generate-how-to", post(guide::generate_how_to))
        .route("/api/generate-plan", post(guide::generate_plan))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Parses a request body, reading an empty body as `null`. Malformed JSON
/// is reported as a server failure under `failure`.
fn parse_body(body: &Bytes, failure: &'static str) -> Result<Value, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| AppError::upstream(failure, e))
}

/// Takes `field` out of a JSON object body, failing with `missing` when it is absent or null.
fn required_field<T: DeserializeOwned>(
    body: &mut Value,
    field: &str,
    missing: &str,
) -> Result<T, AppError> {
    let value = body
        .get_mut(field)
        .map(Value::take)
        .filter(|v| !v.is_null())
        .ok_or_else(|| AppError::validation(missing))?;
    decode(value, missing)
}

fn decode<T: DeserializeOwned>(value: Value, context: &str) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|e| AppError::validation(format!("{}: {}", context, e)))
}
