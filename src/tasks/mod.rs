//! Task and progression builder.
//!
//! Produces the `task_config` block of a deity from its composed variables:
//!
//! - five task definitions (gather, combat, ritual, crafting, exploration)
//! - progression chains gating them by tier tags
//! - AI integration prompts
//!
//! The block is serialized with serde and spliced into the deity template as
//! object members (outer braces stripped).

mod kinds;
mod model;
mod params;
mod progression;
mod prompts;


pub use kinds::TaskKind;
pub use model::{Requirement, TaskConfig, TaskConfigDocument, TaskDefinition};
pub use params::TaskParams;
pub use progression::ProgressionChains;
pub use prompts::render_narrative;

use crate::compose::Variables;
use crate::error::{DeitygenError, Result};
use model::AssignmentBehavior;
use tracing::debug;

/// Build the task configuration for a composed deity.
pub fn build_task_config(vars: &Variables) -> Result<TaskConfig> {
    let params = TaskParams::from_variables(vars)?;
    let progression_chains = ProgressionChains::build(&params);

    let available_tasks: Vec<TaskDefinition> = TaskKind::ALL
        .iter()
        .map(|kind| kind.define(&params, progression_chains.gating_tags(&kind.task_id(&params))))
        .collect();
    debug!(
        theme = %params.theme,
        tasks = available_tasks.len(),
        "built task definitions"
    );

    Ok(TaskConfig {
        enabled: true,
        max_active_tasks: 3,
        task_assignment_behavior: AssignmentBehavior {
            auto_assign_probability: 0.4,
            min_reputation_for_auto_assign: 3,
            conversation_triggers: vec![
                "first_conversation".to_string(),
                "reputation_milestone".to_string(),
                "completed_previous_task".to_string(),
                format!("{}_prayer", params.theme),
                format!("{}_communion", params.theme),
            ],
            cooldown_between_assignments_hours: 24,
        },
        available_tasks,
        progression_chains,
        ai_integration: prompts::build_ai_integration(vars)?,
    })
}

/// Serialize the task configuration as `"task_config": {...}` without the
/// enclosing braces, ready to splice between sibling members.
pub fn render_fragment(config: &TaskConfig) -> Result<String> {
    let document = TaskConfigDocument {
        task_config: config,
    };
    let json = serde_json::to_string_pretty(&document).map_err(|e| {
        DeitygenError::TemplateMalformed(format!("failed to serialize task config: {}", e))
    })?;

    let members = json
        .trim()
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .ok_or_else(|| {
            DeitygenError::TemplateMalformed("task config did not serialize to an object".to_string())
        })?;

    Ok(members.trim().to_string())
}
