use super::{AppState, decode, parse_body};
use crate::demo;
use crate::error::AppError;
use crate::model::{FarmAssessmentInput, TaskPlan};
use crate::prompts;
use axum::{Json, body::Bytes, extract::State};
use tracing::{debug, info};

const DATA_REQUIRED: &str = "Farm assessment data is required";
const FAILURE: &str = "Failed to generate assessment plan";

pub async fn generate_assessment_plan(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TaskPlan>, AppError> {
    let body = parse_body(&body, FAILURE)?;
    if body.is_null() {
        return Err(AppError::validation(DATA_REQUIRED));
    }
    let input: FarmAssessmentInput = decode(body, DATA_REQUIRED)?;

    let Some(generator) = state.generator() else {
        debug!("Demo mode, returning canned assessment plan");
        return Ok(Json(demo::assessment_plan()));
    };

    let prompt = prompts::assessment_prompt(&input);
    let plan = generator
        .generate_plan(&prompt)
        .await
        .map_err(|e| AppError::upstream(FAILURE, e))?;

    info!(
        "Generated {} biosecurity tasks for farm '{}'",
        plan.tasks.len(),
        input.farm_name
    );
    Ok(Json(plan))
}
