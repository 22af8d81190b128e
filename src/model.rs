use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    #[serde(alias = "bot")]
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    #[serde(default)]
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Single canned chat answer returned while no backend is configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotReply {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BiosecurityTask {
    /// Concise title of the task
    pub title: String,
    /// Detailed description of the task
    pub description: String,
    /// Priority level of the task
    pub priority: Priority,
    /// Category of the task (e.g., Infrastructure, Access Control, Water Management)
    pub category: String,
    /// Estimated cost range for the task (e.g., '₱500-1,000', '₱0 (existing equipment)')
    pub estimated_cost: String,
    /// Estimated timeframe for completion (e.g., 'Today', 'Next 7 days', 'Daily')
    pub timeframe: String,
    /// Reason why this task is adapted or recommended for this farm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adaptation_reason: Option<String>,
}

/// Prioritized action plan, also the structured-output contract given to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TaskPlan {
    /// Ordered biosecurity tasks, most urgent first
    #[schemars(length(min = 1))]
    pub tasks: Vec<BiosecurityTask>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FarmAssessmentInput {
    pub farm_name: String,
    pub location: String,
    pub primary_species: String,
    pub farm_type: String,
    pub farm_size: String,
    pub is_new_farmer: String,
    pub existing_pond_years: String,
    pub water_source: Vec<String>,
    pub initial_budget: String,
    pub has_electricity: String,
    pub top_concerns: Vec<String>,

    pub pond_drain_sun_dry: String,
    pub remove_muck_layer: String,
    pub disinfect_pond: String,
    pub filter_incoming_water: String,
    pub separate_reservoir: String,
    pub water_monitoring_frequency: String,
    #[serde(rename = "plSource")]
    pub pl_source: String,
    #[serde(rename = "acclimatePLs")]
    pub acclimate_pls: String,
    #[serde(rename = "quarantinePLs")]
    pub quarantine_pls: String,
    pub has_fencing: String,
    pub use_footbaths: String,
    pub equipment_sharing: String,
    pub visitor_management: String,
    pub waste_disposal: String,
    pub control_feeding: String,
    pub health_monitoring: String,
    pub keep_records: String,
}

impl FarmAssessmentInput {
    pub const EXISTING_POND: &'static str = "Existing Pond";

    pub fn has_existing_pond(&self) -> bool {
        self.is_new_farmer == Self::EXISTING_POND
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskDetails {
    pub title: String,
    pub description: String,
    pub category: String,
    pub estimated_cost: String,
    pub timeframe: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RiskFactor {
    pub name: String,
    pub description: String,
    pub recommendations: Vec<String>,
}
