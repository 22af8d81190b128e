//! Canned responses served while no generation credential is configured.

use crate::model::{BiosecurityTask, BotReply, Priority, RiskFactor, TaskDetails, TaskPlan};
use once_cell::sync::Lazy;
use std::fmt::Write;

pub const DEMO_CHAT_REPLY: &str = "Demo mode: AI chat is disabled because OPENAI_API_KEY is not set. \
                                   Please configure the key to enable live answers.";

static DEMO_PLAN: Lazy<TaskPlan> = Lazy::new(|| TaskPlan {
    tasks: vec![
        demo_task(
            "Demo: Inspect Pond Dykes",
            "Perform a basic inspection of pond dykes for any visible damage or erosion.",
            Priority::Critical,
            "Infrastructure",
            "₱0",
            "Immediate",
            "Demo mode: Basic task for all farms.",
        ),
        demo_task(
            "Demo: Basic Water Quality Check",
            "Check pH and DO levels using existing test kits.",
            Priority::High,
            "Water Management",
            "₱0",
            "Daily",
            "Demo mode: Essential for all farms.",
        ),
        demo_task(
            "Demo: Implement Footbath",
            "Set up a simple footbath at farm entry using local materials.",
            Priority::Medium,
            "Access Control",
            "₱300-800",
            "Within 3 days",
            "Demo mode: Recommended for basic biosecurity.",
        ),
    ],
});

fn demo_task(
    title: &str,
    description: &str,
    priority: Priority,
    category: &str,
    estimated_cost: &str,
    timeframe: &str,
    reason: &str,
) -> BiosecurityTask {
    BiosecurityTask {
        title: title.into(),
        description: description.into(),
        priority,
        category: category.into(),
        estimated_cost: estimated_cost.into(),
        timeframe: timeframe.into(),
        adaptation_reason: Some(reason.into()),
    }
}

pub fn chat_reply() -> BotReply {
    BotReply {
        id: chrono::Utc::now().timestamp_millis().to_string(),
        kind: "bot".into(),
        content: DEMO_CHAT_REPLY.into(),
    }
}

pub fn assessment_plan() -> TaskPlan {
    DEMO_PLAN.clone()
}

pub fn how_to_guide(task: &TaskDetails) -> String {
    let title_lower = task.title.to_lowercase();
    let category_lower = task.category.to_lowercase();

    let mut out = String::with_capacity(1024);
    let _ = writeln!(
        out,
        "<p><strong>Auto-generated demo guide for:</strong> {}</p>",
        task.title
    );
    let _ = writeln!(
        out,
        "<p class=\"mb-2\"><strong>Description:</strong> {}</p>",
        task.description
    );
    out.push_str("<h4 class=\"text-lg font-semibold mt-4 mb-2\">Sample Steps:</h4>\n");
    out.push_str("<ol class=\"list-decimal list-inside space-y-1\">\n");
    let _ = writeln!(
        out,
        "  <li>Identify the specific area or equipment for {title_lower}.</li>"
    );
    let _ = writeln!(
        out,
        "  <li>Gather all necessary tools and materials as per {category_lower} guidelines.</li>"
    );
    let _ = writeln!(
        out,
        "  <li>Follow standard safety procedures for {category_lower} tasks.</li>"
    );
    out.push_str("  <li>Perform the inspection/action carefully, documenting any findings.</li>\n");
    out.push_str("  <li>Report completion and any issues to your supervisor.</li>\n");
    out.push_str("</ol>\n");
    out.push_str(
        "<p class=\"mt-4 text-sm text-gray-600 italic\">\
         (Set OPENAI_API_KEY to get full AI-generated how-to guides.)</p>\n",
    );
    out
}

pub fn risk_plan(risk: &RiskFactor) -> String {
    let steps = risk
        .recommendations
        .iter()
        .enumerate()
        .map(|(idx, step)| format!("{}. {}", idx + 1, step))
        .collect::<Vec<_>>()
        .join("<br/>");

    format!(
        "<p><strong>Auto-generated demo plan for:</strong> {}</p>\n\
         <ol class=\"list-decimal list-inside space-y-1 mt-2\">{}</ol>\n\
         <p class=\"mt-4 text-sm text-gray-600 italic\">\
         (Set OPENAI_API_KEY to get full AI-generated plans.)</p>\n",
        risk.name, steps
    )
}
