//! Built-in theme data and named presets.
//!
//! Each theme carries two layers of variables:
//!
//! - **defaults**: mechanical values (colors, biomes, effects, task nouns, rewards)
//! - **literals**: the narrative fragments the deity template references
//!
//! Named presets (`fire_basic`, ...) add the identity of a ready-made deity on
//! top of a theme.

mod air;
mod earth;
mod fire;
mod water;

use crate::error::{DeitygenError, Result};

/// The variables bundled for one theme.
#[derive(Debug)]
pub struct ThemePreset {
    /// Theme identifier (e.g., "fire").
    pub theme: &'static str,
    /// Mechanical defaults, applied first.
    pub defaults: &'static [(&'static str, &'static str)],
    /// Narrative literals, applied over the defaults.
    pub literals: &'static [(&'static str, &'static str)],
}

impl ThemePreset {
    /// Look up a value in this theme, literals first.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.literals
            .iter()
            .chain(self.defaults.iter())
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }
}

/// A ready-made deity: a theme plus identity fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedPreset {
    pub name: &'static str,
    pub theme: &'static str,
    pub deity_name: &'static str,
    pub title: &'static str,
    pub domains: &'static str,
}

/// The themes generated by batch mode unless configured otherwise.
pub const ELEMENTAL_THEMES: [&str; 4] = ["fire", "water", "earth", "air"];

static THEMES: [&ThemePreset; 4] = [&fire::FIRE, &water::WATER, &earth::EARTH, &air::AIR];

static NAMED_PRESETS: [NamedPreset; 4] = [
    NamedPreset {
        name: "fire_basic",
        theme: "fire",
        deity_name: "Ignis",
        title: "Lord of Flames",
        domains: "fire and forge",
    },
    NamedPreset {
        name: "water_basic",
        theme: "water",
        deity_name: "Aquaria",
        title: "Mistress of Tides",
        domains: "seas and storms",
    },
    NamedPreset {
        name: "earth_basic",
        theme: "earth",
        deity_name: "Gaia",
        title: "Mother of Stone",
        domains: "earth and mountains",
    },
    NamedPreset {
        name: "air_basic",
        theme: "air",
        deity_name: "Zephyr",
        title: "Lord of Winds",
        domains: "sky and storms",
    },
];

/// Find a theme by exact name.
pub fn theme(name: &str) -> Option<&'static ThemePreset> {
    THEMES.iter().copied().find(|t| t.theme == name)
}

/// All bundled themes, in declaration order.
pub fn themes() -> impl Iterator<Item = &'static ThemePreset> {
    THEMES.iter().copied()
}

/// All named presets, in declaration order.
pub fn named_presets() -> &'static [NamedPreset] {
    &NAMED_PRESETS
}

/// The basic preset of a theme, if the theme has one.
pub fn basic_preset_for(theme: &str) -> Option<&'static NamedPreset> {
    NAMED_PRESETS.iter().find(|p| p.theme == theme)
}

/// Resolve a preset by name.
///
/// Accepts a named preset (`fire_basic`) or a bare theme name (`fire`), which
/// resolves to that theme's basic preset.
pub fn named_preset(name: &str) -> Result<&'static NamedPreset> {
    NAMED_PRESETS
        .iter()
        .find(|p| p.name == name)
        .or_else(|| basic_preset_for(name))
        .ok_or_else(|| DeitygenError::UnknownPreset {
            name: name.to_string(),
            available: NAMED_PRESETS.iter().map(|p| p.name.to_string()).collect(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_elemental_themes_are_bundled() {
        for name in ELEMENTAL_THEMES {
            assert!(theme(name).is_some(), "missing theme {}", name);
            assert!(basic_preset_for(name).is_some(), "missing preset for {}", name);
        }
    }

    #[test]
    fn test_unknown_theme() {
        assert!(theme("chaos").is_none());
        assert!(theme("Fire").is_none());
    }

    #[test]
    fn test_named_preset_by_name_and_theme() {
        assert_eq!(named_preset("water_basic").unwrap().deity_name, "Aquaria");
        assert_eq!(named_preset("air").unwrap().name, "air_basic");
    }

    #[test]
    fn test_unknown_preset_lists_available() {
        let err = named_preset("lava_basic").unwrap_err();
        match err {
            DeitygenError::UnknownPreset { name, available } => {
                assert_eq!(name, "lava_basic");
                assert_eq!(
                    available,
                    vec!["fire_basic", "water_basic", "earth_basic", "air_basic"]
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_themes_share_the_same_keys() {
        let keys = |t: &ThemePreset| -> HashSet<&'static str> {
            t.defaults.iter().chain(t.literals.iter()).map(|(k, _)| *k).collect()
        };
        let reference = keys(&fire::FIRE);
        for t in themes() {
            assert_eq!(keys(t), reference, "theme {} diverges from fire", t.theme);
        }
    }

    #[test]
    fn test_no_duplicate_keys_within_a_theme() {
        for t in themes() {
            let mut seen = HashSet::new();
            for (key, _) in t.defaults.iter().chain(t.literals.iter()) {
                assert!(seen.insert(*key), "duplicate key {} in {}", key, t.theme);
            }
        }
    }

    #[test]
    fn test_get_prefers_literals() {
        let fire = theme("fire").unwrap();
        assert_eq!(fire.get("preferred_time"), Some("day"));
        assert_eq!(fire.get("deity_realm"), Some("blazing forges and eternal flames"));
        assert_eq!(fire.get("nonexistent"), None);
    }
}
