//! Progression chains: the order tasks unlock in.

use super::kinds::TaskKind;
use super::params::TaskParams;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Main path, exploration path and the unlock table of one theme.
///
/// Serialized as an object whose keys are prefixed with the theme, in a fixed
/// order: `<theme>_main_path`, `<theme>_exploration_path`,
/// `<theme>_mastery_unlocks`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressionChains {
    pub theme: String,
    pub main_path: Vec<String>,
    pub exploration_path: Vec<String>,
    /// Tier tag to the task ids it unlocks, in tier order.
    pub unlocks: Vec<(String, Vec<String>)>,
}

impl ProgressionChains {
    pub fn build(p: &TaskParams) -> Self {
        let id = |kind: TaskKind| kind.task_id(p);

        let unlocks = vec![
            (p.tier_tag("gatherer"), vec![id(TaskKind::Combat)]),
            (p.tier_tag("warrior"), vec![id(TaskKind::Ritual)]),
            (p.tier_tag("ritualist"), vec![id(TaskKind::Crafting)]),
            (p.tier_tag("explorer"), vec![id(TaskKind::Combat)]),
            (p.tier_tag("master"), Vec::new()),
        ];

        Self {
            theme: p.theme.clone(),
            main_path: TaskKind::MAIN_PATH.iter().map(|k| id(*k)).collect(),
            exploration_path: vec![id(TaskKind::Exploration)],
            unlocks,
        }
    }

    /// Tier tags whose unlock list contains `task_id`.
    pub fn gating_tags(&self, task_id: &str) -> Vec<String> {
        self.unlocks
            .iter()
            .filter(|(_, tasks)| tasks.iter().any(|t| t == task_id))
            .map(|(tag, _)| tag.clone())
            .collect()
    }
}

/// Ordered view of the unlock table.
struct Unlocks<'a>(&'a [(String, Vec<String>)]);

impl Serialize for Unlocks<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (tag, tasks) in self.0 {
            map.serialize_entry(tag, tasks)?;
        }
        map.end()
    }
}

impl Serialize for ProgressionChains {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(&format!("{}_main_path", self.theme), &self.main_path)?;
        map.serialize_entry(
            &format!("{}_exploration_path", self.theme),
            &self.exploration_path,
        )?;
        map.serialize_entry(
            &format!("{}_mastery_unlocks", self.theme),
            &Unlocks(&self.unlocks),
        )?;
        map.end()
    }
}
