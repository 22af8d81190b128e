use super::{AppState, parse_body, required_field};
use crate::demo;
use crate::error::AppError;
use crate::model::{RiskFactor, TaskDetails};
use crate::prompts;
use axum::{Json, body::Bytes, extract::State};
use serde::Serialize;
use tracing::debug;

const TASK_REQUIRED: &str = "Task details are required";
const GUIDE_FAILURE: &str = "Failed to generate how-to guide";
const RISK_REQUIRED: &str = "Risk factor details are required";
const PLAN_FAILURE: &str = "Failed to generate plan";

#[derive(Debug, Serialize)]
pub struct GuideResponse {
    pub guide: String,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub plan: String,
}

pub async fn generate_how_to(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GuideResponse>, AppError> {
    let mut body = parse_body(&body, GUIDE_FAILURE)?;
    let task: TaskDetails = required_field(&mut body, "task", TASK_REQUIRED)?;

    let guide = match state.generator() {
        None => {
            debug!("Demo mode, rendering canned guide for '{}'", task.title);
            demo::how_to_guide(&task)
        }
        Some(generator) => generator
            .generate_text(&prompts::how_to_prompt(&task))
            .await
            .map_err(|e| AppError::upstream(GUIDE_FAILURE, e))?,
    };

    Ok(Json(GuideResponse { guide }))
}

pub async fn generate_plan(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PlanResponse>, AppError> {
    let mut body = parse_body(&body, PLAN_FAILURE)?;
    let risk: RiskFactor = required_field(&mut body, "riskFactor", RISK_REQUIRED)?;

    let plan = match state.generator() {
        None => {
            debug!("Demo mode, rendering canned plan for '{}'", risk.name);
            demo::risk_plan(&risk)
        }
        Some(generator) => generator
            .generate_text(&prompts::risk_plan_prompt(&risk))
            .await
            .map_err(|e| AppError::upstream(PLAN_FAILURE, e))?,
    };

    Ok(Json(PlanResponse { plan }))
}
