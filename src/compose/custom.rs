//! Custom deity configurations supplied as JSON files.
//!
//! A custom config is a flat JSON object. `theme`, `name`, `title` and
//! `domains` fill the request's identity; every other key is an override.
//!
//! ```text
//! {
//!   "theme": "storm",
//!   "name": "Raijin",
//!   "title": "Drummer of Thunder",
//!   "domains": "storms and lightning",
//!   "deity_color": "dark_purple"
//! }
//! ```

use super::ComposeRequest;
use crate::error::{DeitygenError, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// Read and parse a custom config file.
pub fn load_custom_request<P: AsRef<Path>>(path: P) -> Result<ComposeRequest> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        DeitygenError::UserError(format!(
            "failed to read custom config '{}': {}",
            path.display(),
            e
        ))
    })?;

    ComposeRequest::from_json(&content)
}

impl ComposeRequest {
    /// Parse a custom config from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| DeitygenError::UserError(format!("failed to parse custom config: {}", e)))?;

        match value {
            Value::Object(map) => Self::from_map(map),
            _ => Err(DeitygenError::UserError(
                "custom config must be a JSON object".to_string(),
            )),
        }
    }

    fn from_map(mut map: Map<String, Value>) -> Result<Self> {
        let theme = match map.remove("theme") {
            Some(value) => scalar_text("theme", value)?,
            None => return Err(DeitygenError::MissingTheme),
        };
        if theme.trim().is_empty() {
            return Err(DeitygenError::MissingTheme);
        }

        let name = map.remove("name").map(|v| scalar_text("name", v)).transpose()?;
        let title = map.remove("title").map(|v| scalar_text("title", v)).transpose()?;
        let domains = map
            .remove("domains")
            .map(|v| scalar_text("domains", v))
            .transpose()?;

        let overrides: BTreeMap<String, String> = map
            .into_iter()
            .map(|(key, value)| scalar_text(&key, value).map(|text| (key, text)))
            .collect::<Result<_>>()?;

        Ok(Self {
            theme,
            name,
            title,
            domains,
            overrides,
        })
    }
}

/// Text of a scalar JSON value; numbers and booleans use their JSON form.
fn scalar_text(key: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(DeitygenError::UserError(format!(
            "custom config field '{}' must be a string, number or boolean",
            key
        ))),
    }
}
