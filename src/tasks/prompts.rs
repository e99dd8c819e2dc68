//! AI integration text: suggestion prompts and live status formats.

use super::model::{AiIntegration, ContextIntegration, SuggestionPrompts};
use crate::compose::Variables;
use crate::error::{DeitygenError, Result};
use crate::template::{TemplateError, render_template};

const NO_ACTIVE_TASKS: &str = "This faithful follower seeks purpose in serving {deity_domains}. \
     Consider offering them a task that matches their devotion level and understanding.";

const TASK_AVAILABLE: &str = "A sacred duty awaits this devoted follower. \
     Present this opportunity with the authority of {deity_realm}.";

const TASK_COMPLETION: &str = "Celebrate their completion with satisfaction. \
     Their success brings more {deity_influence} into the world.";

const PROGRESSION_MILESTONE: &str =
    "This soul has grown in {power_type}. Their advancement deserves recognition.";

// Runtime slots are escaped so they survive rendering.
const TASK_CONTEXT_FORMAT: &str = "{deity_name} Tasks - Active: {{active_tasks}} | \
     Completed: {{completed_count}} sacred duties | Ready for: {{available_tasks}}";

const PROGRESSION_CONTEXT_FORMAT: &str =
    "{deity_name} Progression: {{current_tier}} | Divine Path: {{unlocked_progressions}}";

/// Render one narrative string strictly against the mapping.
pub fn render_narrative(template: &str, vars: &Variables) -> Result<String> {
    render_template(template, vars.as_map()).map_err(|e| match e {
        TemplateError::UndefinedVariable { name, .. } => DeitygenError::MissingVariable(name),
        other => DeitygenError::TemplateMalformed(other.to_string()),
    })
}

/// Build the AI integration block.
pub fn build_ai_integration(vars: &Variables) -> Result<AiIntegration> {
    Ok(AiIntegration {
        task_suggestion_prompts: SuggestionPrompts {
            no_active_tasks: render_narrative(NO_ACTIVE_TASKS, vars)?,
            task_available: render_narrative(TASK_AVAILABLE, vars)?,
            task_completion: render_narrative(TASK_COMPLETION, vars)?,
            progression_milestone: render_narrative(PROGRESSION_MILESTONE, vars)?,
        },
        context_integration: ContextIntegration {
            include_active_tasks_in_context: true,
            include_completed_tasks_count: true,
            include_available_task_hints: true,
            task_context_format: render_narrative(TASK_CONTEXT_FORMAT, vars)?,
            progression_context_format: render_narrative(PROGRESSION_CONTEXT_FORMAT, vars)?,
        },
    })
}
