//! The five task kinds and how each is laid out.
//!
//! Every kind produces the same [`TaskDefinition`] shape; only the requirement
//! and the reward text differ.

use super::model::{
    AssignmentContext, EntityRequirement, ItemRequirement, Requirement, Rewards, TaskDefinition,
    TriggerConditions,
};
use super::params::{RewardItem, TaskParams};

/// Reputation window and gating of one kind.
struct Gate {
    tier: &'static str,
    min_reputation: u32,
    max_reputation: u32,
    reputation_reward: i32,
    unlocks: &'static str,
}

const REWARD_EFFECT_SECONDS: u32 = 600;
const TASK_COOLDOWN_HOURS: u32 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Gather,
    Combat,
    Ritual,
    Crafting,
    Exploration,
}

impl TaskKind {
    /// All kinds, in the order they appear in the generated task list.
    pub const ALL: [TaskKind; 5] = [
        TaskKind::Gather,
        TaskKind::Combat,
        TaskKind::Ritual,
        TaskKind::Crafting,
        TaskKind::Exploration,
    ];

    /// Kinds on the main progression path, in order.
    pub const MAIN_PATH: [TaskKind; 4] = [
        TaskKind::Gather,
        TaskKind::Combat,
        TaskKind::Ritual,
        TaskKind::Crafting,
    ];

    fn slug(self) -> &'static str {
        match self {
            TaskKind::Gather => "gather",
            TaskKind::Combat => "combat",
            TaskKind::Ritual => "ritual",
            TaskKind::Crafting => "crafting",
            TaskKind::Exploration => "exploration",
        }
    }

    fn gate(self) -> Gate {
        match self {
            TaskKind::Gather => Gate {
                tier: "initiate",
                min_reputation: 0,
                max_reputation: 30,
                reputation_reward: 8,
                unlocks: "gatherer",
            },
            TaskKind::Combat => Gate {
                tier: "acolyte",
                min_reputation: 15,
                max_reputation: 50,
                reputation_reward: 12,
                unlocks: "warrior",
            },
            TaskKind::Ritual => Gate {
                tier: "devotee",
                min_reputation: 30,
                max_reputation: 70,
                reputation_reward: 15,
                unlocks: "ritualist",
            },
            TaskKind::Crafting => Gate {
                tier: "master",
                min_reputation: 50,
                max_reputation: 100,
                reputation_reward: 20,
                unlocks: "master",
            },
            TaskKind::Exploration => Gate {
                tier: "initiate",
                min_reputation: 10,
                max_reputation: 60,
                reputation_reward: 10,
                unlocks: "explorer",
            },
        }
    }

    /// Task id, e.g. `fire_gather_flames`.
    pub fn task_id(self, p: &TaskParams) -> String {
        let noun = match self {
            TaskKind::Gather => &p.resource_type,
            TaskKind::Combat => &p.entity_type,
            TaskKind::Ritual => &p.ritual_type,
            TaskKind::Crafting => &p.item_type,
            TaskKind::Exploration => &p.location_type,
        };
        format!("{}_{}_{}", p.theme, self.slug(), noun)
    }

    /// Tier tag this kind unlocks on completion, e.g. `fire_gatherer`.
    pub fn unlock_tag(self, p: &TaskParams) -> String {
        p.tier_tag(self.gate().unlocks)
    }

    /// The kind preceding this one on the main path.
    fn previous(self) -> Option<TaskKind> {
        let pos = Self::MAIN_PATH.iter().position(|k| *k == self)?;
        pos.checked_sub(1).map(|i| Self::MAIN_PATH[i])
    }

    /// Build the definition.
    ///
    /// `gating_tags` are the progression tags whose unlock lists name this task.
    pub fn define(self, p: &TaskParams, gating_tags: Vec<String>) -> TaskDefinition {
        let gate = self.gate();
        let text = self.text(p);

        TaskDefinition {
            task_id: self.task_id(p),
            display_name: text.display_name,
            description: text.description,
            progression_tier: gate.tier.to_string(),
            ai_assignment_context: AssignmentContext {
                trigger_conditions: TriggerConditions {
                    min_reputation: gate.min_reputation,
                    max_reputation: gate.max_reputation,
                    required_time: vec![p.preferred_time.clone()],
                    prayer_types: vec!["conversation".to_string(), p.theme.clone()],
                    completed_tasks: self.previous().map(|k| k.task_id(p)).into_iter().collect(),
                    unlocked_progressions: gating_tags,
                },
                assignment_prompt: text.assignment_prompt,
                completion_phrases: text.completion_phrases,
            },
            requirements: vec![self.requirement(p)],
            rewards: Rewards {
                reputation: gate.reputation_reward,
                commands: reward_commands(&text.reward, &p.color, &text.reward_message),
                progression_unlock: self.unlock_tag(p),
            },
            cooldown_hours: TASK_COOLDOWN_HOURS,
            repeatable: false,
        }
    }

    fn requirement(self, p: &TaskParams) -> Requirement {
        match self {
            TaskKind::Gather => Requirement::CollectItems {
                items: vec![ItemRequirement {
                    item: p.resource_item(),
                    count: 16,
                    source: "gathering".to_string(),
                    time_requirement: p.preferred_time.clone(),
                    display_name: format!("Sacred {}", title_case(&p.resource_type)),
                }],
            },
            TaskKind::Combat => Requirement::DefeatEntities {
                entities: vec![EntityRequirement {
                    entity: p.target_entity.clone(),
                    count: 8,
                    display_name: format!("Defiant {}", title_case(&p.entity_type)),
                }],
            },
            TaskKind::Ritual => Requirement::PerformRitual {
                ritual: p.ritual_type.clone(),
                biome: p.primary_biome.clone(),
                time_requirement: p.preferred_time.clone(),
                offerings: vec![ItemRequirement {
                    item: p.offering_item.clone(),
                    count: 4,
                    source: "offering".to_string(),
                    time_requirement: p.preferred_time.clone(),
                    display_name: "Ritual Offering".to_string(),
                }],
            },
            TaskKind::Crafting => Requirement::CraftItems {
                items: vec![ItemRequirement {
                    item: format!("eidolonunchained:{}_{}", p.theme, p.item_type),
                    count: 4,
                    source: "crucible".to_string(),
                    time_requirement: "any".to_string(),
                    display_name: format!("Crucible {}", title_case(&p.item_type)),
                }],
            },
            TaskKind::Exploration => Requirement::VisitLocation {
                location: p.location_type.clone(),
                biome: p.exploration_biome.clone(),
                display_name: format!("The {}", title_case(&p.location_type)),
            },
        }
    }

    fn text(self, p: &TaskParams) -> TaskText {
        match self {
            TaskKind::Gather => TaskText {
                display_name: format!("Gather {}", title_case(&p.resource_type)),
                description: format!(
                    "Collect {} that resonate with {}",
                    p.resource_type, p.domains
                ),
                assignment_prompt: format!(
                    "Young seeker, collect sacred {} to prove your devotion.",
                    p.resource_type
                ),
                completion_phrases: vec![
                    format!(
                        "Your gathering of {} shows dedication to {}.",
                        p.resource_type, p.domains
                    ),
                    format!(
                        "The {} you've collected resonate with divine power.",
                        p.resource_type
                    ),
                    format!("Your harvest strengthens the connection to {}.", p.realm),
                ],
                reward: Reward {
                    item: RewardItem {
                        item: "minecraft:diamond".to_string(),
                        count: "2".to_string(),
                    },
                    effect: p.primary_effect.clone(),
                },
                reward_message: format!("✦ The power of {} flows through you", p.domains),
            },
            TaskKind::Combat => TaskText {
                display_name: format!("Trial Against the {}", title_case(&p.entity_type)),
                description: format!(
                    "Defeat the {} that defy {}",
                    p.entity_type, p.deity_name
                ),
                assignment_prompt: format!(
                    "Acolyte, the {} grow bold. Show them the strength I have given you.",
                    p.entity_type
                ),
                completion_phrases: vec![
                    format!("The {} fall before your devotion.", p.entity_type),
                    format!("Your victory echoes through {}.", p.realm),
                    format!("{} has witnessed your strength.", p.deity_name),
                ],
                reward: Reward {
                    item: p.reward_items[0].clone(),
                    effect: p.secondary_effect.clone(),
                },
                reward_message: format!(
                    "✦ {} honors your strength against the {}",
                    p.deity_name, p.entity_type
                ),
            },
            TaskKind::Ritual => TaskText {
                display_name: format!("The {} Ritual", title_case(&p.ritual_type)),
                description: format!(
                    "Perform the {} ritual where {} is strongest",
                    p.ritual_type, p.domains
                ),
                assignment_prompt: format!(
                    "Devotee, you are ready to perform the {} ritual. Bring an offering worthy of {}.",
                    p.ritual_type, p.realm
                ),
                completion_phrases: vec![
                    format!("The {} ritual is complete, and I am pleased.", p.ritual_type),
                    format!("Your offering has reached {}.", p.realm),
                    format!("Few mortals perform the {} so faithfully.", p.ritual_type),
                ],
                reward: Reward {
                    item: p.reward_items[1].clone(),
                    effect: p.communion_effects[0].clone(),
                },
                reward_message: format!(
                    "✦ The {} ritual binds you closer to {}",
                    p.ritual_type, p.realm
                ),
            },
            TaskKind::Crafting => TaskText {
                display_name: format!("Forge the Sacred {}", title_case(&p.item_type)),
                description: format!(
                    "Craft {} {} in the crucible as proof of mastery over {}",
                    p.theme, p.item_type, p.domains
                ),
                assignment_prompt: format!(
                    "Master, only your hands can shape the sacred {}. Go to the crucible.",
                    p.item_type
                ),
                completion_phrases: vec![
                    format!("This {} carries my blessing forever.", p.item_type),
                    format!("You have mastered the crafts of {}.", p.domains),
                    format!("{} names you among the masters.", p.deity_name),
                ],
                reward: Reward {
                    item: p.reward_items[3].clone(),
                    effect: p.communion_effects[1].clone(),
                },
                reward_message: format!(
                    "✦ {} names you a master of {}",
                    p.deity_name, p.domains
                ),
            },
            TaskKind::Exploration => TaskText {
                display_name: format!("Pilgrimage to the {}", title_case(&p.location_type)),
                description: format!(
                    "Journey through {} and reach the sacred {}",
                    p.environment, p.location_type
                ),
                assignment_prompt: format!(
                    "Seeker, travel to the {} and feel how far {} reaches.",
                    p.location_type, p.realm
                ),
                completion_phrases: vec![
                    format!("You have walked the {} in my name.", p.location_type),
                    format!("The {} remember your footsteps.", p.environment),
                    format!("Your pilgrimage brings you closer to {}.", p.realm),
                ],
                reward: Reward {
                    item: p.reward_items[2].clone(),
                    effect: p.primary_effect.clone(),
                },
                reward_message: format!(
                    "✦ The {} reveal the reach of {}",
                    p.location_type, p.realm
                ),
            },
        }
    }
}

struct Reward {
    item: RewardItem,
    effect: String,
}

struct TaskText {
    display_name: String,
    description: String,
    assignment_prompt: String,
    completion_phrases: Vec<String>,
    reward: Reward,
    reward_message: String,
}

/// `give`, `effect` and `tellraw` commands for a reward.
fn reward_commands(reward: &Reward, color: &str, message: &str) -> Vec<String> {
    let message = serde_json::Value::from(message);
    let color = serde_json::Value::from(color);
    vec![
        format!("give {{player}} {} {}", reward.item.item, reward.item.count),
        format!(
            "effect give {{player}} {} {} 0",
            reward.effect, REWARD_EFFECT_SECONDS
        ),
        format!(
            "tellraw {{player}} {{\"text\":{},\"color\":{}}}",
            message, color
        ),
    ]
}

/// Capitalize the first letter of every word.
pub(crate) fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
