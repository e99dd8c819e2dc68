//! Preset composition.
//!
//! Builds the flat [`Variables`] mapping for one deity by applying layers in
//! order, later layers winning:
//!
//! 1. theme defaults
//! 2. theme narrative literals
//! 3. identity and derived values (`deity_id`, `secondary_domain`, `opposite_time`, ...)
//! 4. caller overrides
//!
//! An unknown theme contributes no layers; the result then holds only the
//! identity and overrides, and rendering reports the rest as unresolved.

mod custom;
mod variables;

#[cfg(test)]
mod tests;

pub use custom::load_custom_request;
pub use variables::Variables;

use crate::error::{DeitygenError, Result};
use crate::presets::{self, NamedPreset};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::debug;

/// Identifiers that end up in file names and resource locations.
static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9_\-]*$").expect("Invalid identifier regex"));

/// Everything the caller supplies for one deity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeRequest {
    /// Theme name, selecting the preset layers.
    pub theme: String,
    /// Deity name. Custom configs fall back to the theme's basic preset.
    pub name: Option<String>,
    /// Deity title. Custom configs fall back to the theme's basic preset.
    pub title: Option<String>,
    /// Domain description, e.g. "fire and forge".
    pub domains: Option<String>,
    /// Explicit variable overrides, applied last.
    pub overrides: BTreeMap<String, String>,
}

impl ComposeRequest {
    /// A request with every identity field given explicitly.
    pub fn for_theme(
        theme: impl Into<String>,
        name: impl Into<String>,
        title: impl Into<String>,
        domains: impl Into<String>,
    ) -> Self {
        Self {
            theme: theme.into(),
            name: Some(name.into()),
            title: Some(title.into()),
            domains: Some(domains.into()),
            overrides: BTreeMap::new(),
        }
    }

    /// A request reproducing a bundled named preset.
    pub fn from_preset(preset: &NamedPreset) -> Self {
        Self::for_theme(preset.theme, preset.deity_name, preset.title, preset.domains)
    }

    /// Add overrides, replacing earlier ones with the same key.
    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.overrides.extend(overrides);
        self
    }

    /// Fail with `MissingField` unless name, title and domains are all given.
    ///
    /// The `theme` command checks this before composing; only custom configs
    /// take the basic preset's identity.
    pub fn require_identity(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("title", &self.title),
            ("domains", &self.domains),
        ] {
            identity_field(field, value.as_deref(), None)?;
        }
        Ok(())
    }
}

/// Domain after the last `" and "`, or the whole string when there is none.
pub fn secondary_domain(domains: &str) -> &str {
    domains.rsplit(" and ").next().unwrap_or(domains)
}

/// Complement of a preferred time of day.
///
/// Only `day` is special-cased; everything else, including `any`, maps to `day`.
pub fn opposite_time(preferred_time: Option<&str>) -> &'static str {
    match preferred_time {
        Some("day") => "night",
        _ => "day",
    }
}

/// Validate an identifier used in file names (themes, deity ids).
pub fn validate_identifier(kind: &str, value: &str) -> Result<()> {
    if IDENTIFIER_REGEX.is_match(value) {
        return Ok(());
    }

    let mut message = format!(
        "{} '{}' must be lowercase letters, digits, '_' or '-'",
        kind, value
    );
    let lowered = value.to_lowercase();
    if IDENTIFIER_REGEX.is_match(&lowered) {
        message.push_str(&format!(" (did you mean '{}'?)", lowered));
    }
    Err(DeitygenError::InvalidName(message))
}

/// Pick the explicit value, else the basic preset's, else fail.
fn identity_field(
    field: &str,
    explicit: Option<&str>,
    fallback: Option<&'static str>,
) -> Result<String> {
    explicit
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or(fallback)
        .map(str::to_string)
        .ok_or_else(|| DeitygenError::MissingField(field.to_string()))
}

/// Compose the variable mapping for a request.
pub fn compose(request: &ComposeRequest) -> Result<Variables> {
    let theme = request.theme.trim();
    validate_identifier("theme", theme)?;

    let basic = presets::basic_preset_for(theme);
    let name = identity_field("name", request.name.as_deref(), basic.map(|p| p.deity_name))?;
    let title = identity_field("title", request.title.as_deref(), basic.map(|p| p.title))?;
    let domains = identity_field("domains", request.domains.as_deref(), basic.map(|p| p.domains))?;

    let mut vars = Variables::new();

    match presets::theme(theme) {
        Some(preset) => {
            vars.apply(preset.defaults.iter().copied());
            vars.apply(preset.literals.iter().copied());
            debug!(theme, variables = vars.len(), "applied theme layers");
        }
        None => debug!(theme, "unknown theme, composing without defaults"),
    }

    let opposite = opposite_time(vars.get("preferred_time"));
    let secondary = secondary_domain(&domains).to_string();

    vars.apply([
        ("deity_id", format!("{}_deity", theme)),
        ("deity_theme", theme.to_string()),
        ("primary_domain", theme.to_string()),
        ("secondary_domain", secondary),
        ("opposite_time", opposite.to_string()),
        ("deity_name", name),
        ("deity_title", title),
        ("deity_domains", domains),
    ]);

    if !request.overrides.is_empty() {
        let replaced = request.overrides.keys().filter(|k| vars.contains(k)).count();
        debug!(
            overrides = request.overrides.len(),
            replaced, "applying caller overrides"
        );
    }
    vars.apply(request.overrides.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    Ok(vars)
}
