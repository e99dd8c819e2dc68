//! Serializable shape of the task configuration fragment.
//!
//! Field order here is the order in the generated JSON.

use super::progression::ProgressionChains;
use serde::Serialize;

/// Wrapper producing the `"task_config": {...}` member.
#[derive(Debug, Clone, Serialize)]
pub struct TaskConfigDocument<'a> {
    pub task_config: &'a TaskConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskConfig {
    pub enabled: bool,
    pub max_active_tasks: u32,
    pub task_assignment_behavior: AssignmentBehavior,
    pub available_tasks: Vec<TaskDefinition>,
    pub progression_chains: ProgressionChains,
    pub ai_integration: AiIntegration,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssignmentBehavior {
    pub auto_assign_probability: f64,
    pub min_reputation_for_auto_assign: u32,
    pub conversation_triggers: Vec<String>,
    pub cooldown_between_assignments_hours: u32,
}

/// One quest a deity can hand out.
#[derive(Debug, Clone, Serialize)]
pub struct TaskDefinition {
    pub task_id: String,
    pub display_name: String,
    pub description: String,
    pub progression_tier: String,
    pub ai_assignment_context: AssignmentContext,
    pub requirements: Vec<Requirement>,
    pub rewards: Rewards,
    pub cooldown_hours: u32,
    pub repeatable: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssignmentContext {
    pub trigger_conditions: TriggerConditions,
    pub assignment_prompt: String,
    pub completion_phrases: Vec<String>,
}

/// When the AI may offer a task.
#[derive(Debug, Clone, Serialize)]
pub struct TriggerConditions {
    pub min_reputation: u32,
    pub max_reputation: u32,
    pub required_time: Vec<String>,
    pub prayer_types: Vec<String>,
    pub completed_tasks: Vec<String>,
    pub unlocked_progressions: Vec<String>,
}

/// What the player must do. Serialized with a `type` tag.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Requirement {
    CollectItems {
        items: Vec<ItemRequirement>,
    },
    DefeatEntities {
        entities: Vec<EntityRequirement>,
    },
    PerformRitual {
        ritual: String,
        biome: String,
        time_requirement: String,
        offerings: Vec<ItemRequirement>,
    },
    CraftItems {
        items: Vec<ItemRequirement>,
    },
    VisitLocation {
        location: String,
        biome: String,
        display_name: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemRequirement {
    pub item: String,
    pub count: u32,
    pub source: String,
    pub time_requirement: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntityRequirement {
    pub entity: String,
    pub count: u32,
    pub display_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Rewards {
    pub reputation: i32,
    pub commands: Vec<String>,
    pub progression_unlock: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AiIntegration {
    pub task_suggestion_prompts: SuggestionPrompts,
    pub context_integration: ContextIntegration,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestionPrompts {
    pub no_active_tasks: String,
    pub task_available: String,
    pub task_completion: String,
    pub progression_milestone: String,
}

/// Live status lines; the format strings keep their `{...}` slots for the
/// game to fill at runtime.
#[derive(Debug, Clone, Serialize)]
pub struct ContextIntegration {
    pub include_active_tasks_in_context: bool,
    pub include_completed_tasks_count: bool,
    pub include_available_task_hints: bool,
    pub task_context_format: String,
    pub progression_context_format: String,
}
