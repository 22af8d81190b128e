use super::{AppState, decode, parse_body};
use crate::demo;
use crate::error::AppError;
use crate::generator::{GeneratorError, StreamEvent};
use crate::model::ChatMessage;
use crate::prompts::ChatContext;
use anyhow::anyhow;
use axum::{
    Json,
    body::{Body, Bytes},
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use futures_util::{StreamExt, stream};
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, error};

const MESSAGES_REQUIRED: &str = "Messages are required";
const STREAM_BUFFER: usize = 64;

struct ChatRoute {
    context: ChatContext,
    context_field: &'static str,
    failure: &'static str,
}

static HOW_TO_ROUTE: ChatRoute = ChatRoute {
    context: ChatContext::HowToGuide,
    context_field: "guideContext",
    failure: "Failed to stream chat for how-to guide",
};

static PLAN_ROUTE: ChatRoute = ChatRoute {
    context: ChatContext::ActionPlan,
    context_field: "planContext",
    failure: "Failed to stream chat for action plan",
};

pub async fn chat_how_to(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    handle_chat(&HOW_TO_ROUTE, state, body).await
}

pub async fn chat_plan(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    handle_chat(&PLAN_ROUTE, state, body).await
}

async fn handle_chat(route: &ChatRoute, state: AppState, body: Bytes) -> Result<Response, AppError> {
    let mut body = parse_body(&body, route.failure)?;

    let messages = match body.get_mut("messages").map(Value::take) {
        Some(value @ Value::Array(_)) => value,
        _ => return Err(AppError::validation(MESSAGES_REQUIRED)),
    };

    let Some(generator) = state.generator().cloned() else {
        debug!("Demo mode, answering chat with canned reply");
        return Ok(Json(demo::chat_reply()).into_response());
    };
    let messages: Vec<ChatMessage> = decode(messages, MESSAGES_REQUIRED)?;

    let context = body
        .get(route.context_field)
        .and_then(Value::as_str)
        .unwrap_or_default();
    let system = route.context.system_instruction(context);

    let (tx, mut rx) = mpsc::channel(STREAM_BUFFER);
    tokio::spawn(async move {
        if let Err(e) = generator.stream_chat(&system, &messages, tx).await {
            error!("Chat stream error: {}", e);
        }
    });

    // Nothing is committed to the client until the backend has produced its first event.
    let first = match rx.recv().await {
        Some(StreamEvent::TextDelta(text)) => text,
        Some(StreamEvent::Error(e)) => return Err(AppError::upstream(route.failure, anyhow!(e))),
        Some(StreamEvent::Done) | None => {
            return Err(AppError::upstream(
                route.failure,
                anyhow!("backend stream ended without producing any text"),
            ));
        }
    };

    let rest = stream::unfold(rx, |mut rx| async move {
        match rx.recv().await? {
            StreamEvent::TextDelta(text) => Some((Ok(text), rx)),
            StreamEvent::Done => None,
            StreamEvent::Error(e) => Some((Err(GeneratorError::Stream(e)), rx)),
        }
    });
    let relay = stream::once(async move { Ok(first) }).chain(rest);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        Body::from_stream(relay),
    )
        .into_response())
}
