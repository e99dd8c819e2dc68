//! Template source selection and document extraction.
//!
//! A template is either the embedded canonical template or the first fenced
//! JSON block of a markdown document:
//!
//! ````text
//! # Universal Deity Template
//!
//! ```json
//! {{
//!   "deity": "eidolonunchained:{deity_id}",
//!   ...
//! }}
//! ```
//! ````

use super::deity::DEITY_TEMPLATE;
use crate::error::{DeitygenError, Result};
use regex::Regex;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// First fenced json block whose body starts with `{` and ends with `}`.
static JSON_BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```json\r?\n(\{.*?\})\r?\n```").expect("Invalid template block regex")
});

/// Where the template text comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TemplateSource {
    /// The template compiled into the binary.
    #[default]
    Embedded,
    /// A markdown document containing a fenced JSON template block.
    Document(PathBuf),
}

impl TemplateSource {
    /// Select a document source when a path is given, the embedded one otherwise.
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => TemplateSource::Document(path),
            None => TemplateSource::Embedded,
        }
    }

    /// Load the template text.
    pub fn load(&self) -> Result<Cow<'static, str>> {
        match self {
            TemplateSource::Embedded => Ok(Cow::Borrowed(DEITY_TEMPLATE)),
            TemplateSource::Document(path) => load_document(path).map(Cow::Owned),
        }
    }
}

/// Read a markdown document and extract its template block.
pub fn load_document(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        DeitygenError::TemplateNotFound(format!("{}: {}", path.display(), e))
    })?;

    extract_template_block(&content).map(str::to_string).ok_or_else(|| {
        DeitygenError::TemplateMalformed(format!(
            "'{}' has no ```json block starting with '{{' and ending with '}}'",
            path.display()
        ))
    })
}

/// Extract the body of the first fenced JSON block.
pub fn extract_template_block(markdown: &str) -> Option<&str> {
    JSON_BLOCK_REGEX
        .captures(markdown)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_source_is_default() {
        let source = TemplateSource::from_option(None);
        assert_eq!(source, TemplateSource::Embedded);
        assert!(source.load().unwrap().contains("{task_config_json}"));
    }

    #[test]
    fn test_extract_block_from_markdown() {
        let markdown = "# Template\n\nIntro text.\n\n```json\n{{\n  \"deity\": \"{deity_id}\"\n}}\n```\n\nTrailer.\n";
        let block = extract_template_block(markdown).unwrap();
        assert_eq!(block, "{{\n  \"deity\": \"{deity_id}\"\n}}");
    }

    #[test]
    fn test_extract_takes_first_block() {
        let markdown = "```json\n{{\"a\": 1}}\n```\n\n```json\n{{\"b\": 2}}\n```\n";
        assert_eq!(extract_template_block(markdown), Some("{{\"a\": 1}}"));
    }

    #[test]
    fn test_extract_ignores_non_json_fences() {
        let markdown = "```text\n{not json}\n```\n";
        assert_eq!(extract_template_block(markdown), None);
    }

    #[test]
    fn test_missing_document_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let source = TemplateSource::Document(temp_dir.path().join("missing.md"));
        let err = source.load().unwrap_err();
        assert!(matches!(err, DeitygenError::TemplateNotFound(_)));
    }

    #[test]
    fn test_document_without_block_is_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("TEMPLATE.md");
        fs::write(&path, "# Template\n\nNo code here.\n").unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, DeitygenError::TemplateMalformed(_)));
    }

    #[test]
    fn test_document_source_loads_block() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("TEMPLATE.md");
        fs::write(&path, "Docs\n\n```json\n{{\"deity\": \"{deity_id}\"}}\n```\n").unwrap();

        let loaded = TemplateSource::Document(path).load().unwrap();
        assert_eq!(loaded, "{{\"deity\": \"{deity_id}\"}}");
    }
}
