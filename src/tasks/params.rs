//! Typed inputs of the task builder.

use crate::compose::Variables;
use crate::error::Result;

/// A reward item and the count handed out, both as composed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardItem {
    pub item: String,
    pub count: String,
}

/// Everything the task builder reads from a composed mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskParams {
    pub theme: String,
    pub deity_name: String,
    pub domains: String,
    pub realm: String,
    pub color: String,
    pub preferred_time: String,
    pub environment: String,
    pub primary_effect: String,
    pub secondary_effect: String,
    pub communion_effects: [String; 2],
    pub offering_item: String,
    pub primary_biome: String,
    pub exploration_biome: String,
    pub resource_type: String,
    pub entity_type: String,
    pub ritual_type: String,
    pub item_type: String,
    pub location_type: String,
    pub target_entity: String,
    pub reward_items: [RewardItem; 4],
}

impl TaskParams {
    /// Extract the parameters, failing on the first missing variable.
    pub fn from_variables(vars: &Variables) -> Result<Self> {
        let get = |key: &str| vars.require(key).map(str::to_string);
        let reward = |n: u8| -> Result<RewardItem> {
            Ok(RewardItem {
                item: get(&format!("reward_item_{}", n))?,
                count: get(&format!("count_{}", n))?,
            })
        };

        Ok(Self {
            theme: get("deity_theme")?,
            deity_name: get("deity_name")?,
            domains: get("deity_domains")?,
            realm: get("deity_realm")?,
            color: get("deity_color")?,
            preferred_time: vars.get("preferred_time").unwrap_or("any").to_string(),
            environment: get("environment")?,
            primary_effect: get("primary_effect")?,
            secondary_effect: get("secondary_effect")?,
            communion_effects: [get("communion_effect_1")?, get("communion_effect_2")?],
            offering_item: get("communion_item_1")?,
            primary_biome: get("primary_biome")?,
            exploration_biome: get("tertiary_biome")?,
            resource_type: get("resource_type")?,
            entity_type: get("entity_type")?,
            ritual_type: get("ritual_type")?,
            item_type: get("item_type")?,
            location_type: get("location_type")?,
            target_entity: get("target_entity")?,
            reward_items: [reward(1)?, reward(2)?, reward(3)?, reward(4)?],
        })
    }

    /// Item id gathered for the resource: the resource type without a trailing `s`.
    pub fn resource_item(&self) -> String {
        let singular = self
            .resource_type
            .strip_suffix('s')
            .unwrap_or(&self.resource_type);
        format!("minecraft:{}", singular)
    }

    /// A progression tier tag scoped to this theme, e.g. `fire_gatherer`.
    pub fn tier_tag(&self, tier: &str) -> String {
        format!("{}_{}", self.theme, tier)
    }
}
