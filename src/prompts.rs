use crate::model::{FarmAssessmentInput, RiskFactor, TaskDetails};
use std::fmt::Write;

const ASSESSMENT_TASK_INSTRUCTIONS: &str = "Generate a list of 5-8 actionable biosecurity tasks. \
     For each task, provide a concise title, a detailed description, a priority (critical, high, medium, low), \
     a category, an estimated cost (e.g., '₱500-1,000' or '₱0 (existing equipment)'), \
     a timeframe (e.g., 'Today', 'Next 7 days', 'Daily'), and an 'adaptationReason' explaining why this task \
     is relevant based on the provided farm data. Ensure the estimated costs are realistic for the Philippines \
     context and align with the initial budget if possible. Prioritize tasks that address the farmer's top \
     concerns and identified gaps in current practices.\n";

pub const PLAN_EXTRACTOR_PREAMBLE: &str = "You are an aquaculture biosecurity planner. \
     Produce a prioritized action plan as a list of tasks that matches the requested structure exactly.";

/// Which document a chat conversation is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatContext {
    HowToGuide,
    ActionPlan,
}

impl ChatContext {
    pub fn system_instruction(self, context: &str) -> String {
        let (role, subject, scope) = match self {
            ChatContext::HowToGuide => (
                "You are a LikAI assistant specialized in providing detailed guidance on aquaculture how-to guides.",
                "how-to guide",
                "general aquaculture practices",
            ),
            ChatContext::ActionPlan => (
                "You are an AquaSecure AI assistant specialized in providing detailed guidance on aquaculture biosecurity action plans.",
                "action plan",
                "general aquaculture biosecurity",
            ),
        };
        let short = match self {
            ChatContext::HowToGuide => "guide",
            ChatContext::ActionPlan => "plan",
        };

        let mut out = String::with_capacity(640 + context.len());
        let _ = write!(
            out,
            "{role} Your goal is to help the user understand and implement their specific {subject}.\n\n\
             Here is the current {subject} context:\n\
             {context}\n\n\
             Answer questions directly related to the {subject}, provide clarifications, suggest alternative \
             approaches, or offer additional tips. Keep your responses concise and actionable. If a question is \
             outside the scope of the provided {short} or {scope}, gently redirect the user to focus on the {short}."
        );
        out
    }
}

pub fn assessment_prompt(input: &FarmAssessmentInput) -> String {
    let mut out = String::with_capacity(2048);
    out.push_str(
        "Based on the following farm profile and current biosecurity practices, \
         generate a dynamic, prioritized biosecurity action plan.\n\n",
    );

    out.push_str("Farm Profile:\n");
    let _ = writeln!(out, "Farm Name: {}", input.farm_name);
    let _ = writeln!(out, "Location: {}", input.location);
    let _ = writeln!(out, "Primary Shrimp Species: {}", input.primary_species);
    let _ = writeln!(out, "Farm Type: {}", input.farm_type);
    let _ = writeln!(out, "Farm Size: {}", input.farm_size);
    let _ = writeln!(out, "New/Existing Farmer: {}", input.is_new_farmer);
    if !input.existing_pond_years.is_empty() {
        let _ = writeln!(out, "Years in use: {}", input.existing_pond_years);
    }
    let _ = writeln!(out, "Water Source: {}", input.water_source.join(", "));
    let _ = writeln!(out, "Initial Biosecurity Budget: {}", input.initial_budget);
    let _ = writeln!(out, "Electricity Access: {}", input.has_electricity);
    let _ = writeln!(out, "Top Concerns: {}", input.top_concerns.join(", "));
    out.push('\n');

    if input.has_existing_pond() {
        let practices = [
            ("Pond Drain & Sun-dry", &input.pond_drain_sun_dry),
            ("Remove Muck Layer", &input.remove_muck_layer),
            ("Disinfect Pond", &input.disinfect_pond),
            ("Filter Incoming Water", &input.filter_incoming_water),
            ("Separate Reservoir", &input.separate_reservoir),
            ("Water Monitoring Frequency", &input.water_monitoring_frequency),
            ("PL Source", &input.pl_source),
            ("Acclimate PLs", &input.acclimate_pls),
            ("Quarantine PLs", &input.quarantine_pls),
            ("Has Fencing", &input.has_fencing),
            ("Use Footbaths", &input.use_footbaths),
            ("Equipment Sharing", &input.equipment_sharing),
            ("Visitor Management", &input.visitor_management),
            ("Waste Disposal", &input.waste_disposal),
            ("Control Feeding", &input.control_feeding),
            ("Health Monitoring", &input.health_monitoring),
            ("Keep Records", &input.keep_records),
        ];
        out.push_str("Current Biosecurity & Management Practices:\n");
        for (label, value) in practices {
            let _ = writeln!(out, "{label}: {value}");
        }
        out.push('\n');
    }

    out.push_str(ASSESSMENT_TASK_INSTRUCTIONS);
    out
}

pub fn how_to_prompt(task: &TaskDetails) -> String {
    format!(
        "Generate a detailed, step-by-step how-to guide for the following aquaculture task. \
         Focus on practical, actionable steps, including materials, procedures, and tips.\n\n\
         Task Title: {}\n\
         Description: {}\n\
         Category: {}\n\
         Estimated Cost: {}\n\
         Timeframe: {}\n\n\
         Provide the guide in a clear, numbered list format. Include sections for \"Materials Needed\", \
         \"Step-by-Step Procedure\", and \"Tips for Success\". Use HTML formatting for readability.",
        task.title, task.description, task.category, task.estimated_cost, task.timeframe
    )
}

pub fn risk_plan_prompt(risk: &RiskFactor) -> String {
    format!(
        "Generate a detailed, step-by-step action plan for the following aquaculture risk factor. \
         Focus on practical, actionable steps.\n\n\
         Risk Factor Name: {}\n\
         Description: {}\n\
         AI Recommendations: {}\n\n\
         Provide the plan in a clear, numbered list format. Include estimated timeframes and potential \
         resources needed for each step. Also, include a concluding remark encouraging the user.",
        risk.name,
        risk.description,
        risk.recommendations.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn farm(is_new_farmer: &str) -> FarmAssessmentInput {
        FarmAssessmentInput {
            farm_name: "Laguna Shrimp Co".into(),
            is_new_farmer: is_new_farmer.into(),
            water_source: vec!["River".into(), "Deep well".into()],
            top_concerns: vec!["White spot".into()],
            pond_drain_sun_dry: "Sometimes".into(),
            ..Default::default()
        }
    }

    #[test]
    fn system_instruction_embeds_context_verbatim() {
        let ctx = "Step 1: <b>lime</b> the pond";
        let guide = ChatContext::HowToGuide.system_instruction(ctx);
        let plan = ChatContext::ActionPlan.system_instruction(ctx);
        assert!(guide.contains(ctx));
        assert!(guide.contains("how-to guide context"));
        assert!(plan.contains(ctx));
        assert!(plan.contains("action plan context"));
        assert!(plan.contains("general aquaculture biosecurity"));
    }

    #[test]
    fn practices_block_only_for_existing_ponds() {
        let new_setup = assessment_prompt(&farm("New Setup"));
        assert!(!new_setup.contains("Current Biosecurity & Management Practices"));
        assert!(!new_setup.contains("Pond Drain & Sun-dry"));

        let existing = assessment_prompt(&farm(FarmAssessmentInput::EXISTING_POND));
        assert!(existing.contains("Current Biosecurity & Management Practices"));
        assert!(existing.contains("Pond Drain & Sun-dry: Sometimes"));
    }

    #[test]
    fn assessment_prompt_joins_lists_and_skips_empty_years() {
        let prompt = assessment_prompt(&farm("New Setup"));
        assert!(prompt.contains("Farm Name: Laguna Shrimp Co"));
        assert!(prompt.contains("Water Source: River, Deep well"));
        assert!(prompt.contains("Top Concerns: White spot"));
        assert!(!prompt.contains("Years in use"));
        assert!(prompt.contains("5-8 actionable biosecurity tasks"));

        let mut with_years = farm("Existing Pond");
        with_years.existing_pond_years = "6".into();
        assert!(assessment_prompt(&with_years).contains("Years in use: 6"));
    }

    #[test]
    fn risk_plan_prompt_lists_recommendations() {
        let risk = RiskFactor {
            name: "Poor water exchange".into(),
            description: "Stagnant ponds".into(),
            recommendations: vec!["Add aerators".into(), "Test DO daily".into()],
        };
        let prompt = risk_plan_prompt(&risk);
        assert!(prompt.contains("Risk Factor Name: Poor water exchange"));
        assert!(prompt.contains("AI Recommendations: Add aerators, Test DO daily"));
    }
}
