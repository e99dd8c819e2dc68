//! Error types for the deitygen CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for deitygen operations.
///
/// Every fatal condition surfaces as exactly one of these variants. Unresolved
/// placeholders are not represented here: they are a warning, not a failure.
#[derive(Error, Debug)]
pub enum DeitygenError {
    /// The template document does not exist or could not be read.
    #[error("template file not found: {0}")]
    TemplateNotFound(String),

    /// The template document exists but has no usable JSON block.
    #[error("malformed template: {0}")]
    TemplateMalformed(String),

    /// A preset name that is not bundled with the generator.
    #[error("unknown preset: {name}. Available: {}", .available.join(", "))]
    UnknownPreset {
        name: String,
        available: Vec<String>,
    },

    /// A required identity field (name, title, domains) was not supplied.
    #[error("missing required field '{0}' for theme-based generation")]
    MissingField(String),

    /// A custom configuration did not name its theme.
    #[error("custom config must include a 'theme' field")]
    MissingTheme,

    /// A narrative string referenced a variable the mapping does not hold.
    #[error("missing variable '{0}' while rendering narrative text")]
    MissingVariable(String),

    /// An identifier that cannot safely be used as part of a file name.
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// User provided invalid input (unparsable config, bad arguments).
    #[error("{0}")]
    UserError(String),

    /// Filesystem operation failed while writing output.
    #[error("write failed: {0}")]
    Io(String),
}

impl DeitygenError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DeitygenError::TemplateNotFound(_)
            | DeitygenError::TemplateMalformed(_)
            | DeitygenError::MissingVariable(_) => exit_codes::TEMPLATE_FAILURE,
            DeitygenError::UnknownPreset { .. }
            | DeitygenError::MissingField(_)
            | DeitygenError::MissingTheme
            | DeitygenError::InvalidName(_)
            | DeitygenError::UserError(_) => exit_codes::USER_ERROR,
            DeitygenError::Io(_) => exit_codes::WRITE_FAILURE,
        }
    }
}

/// Result type alias for deitygen operations.
pub type Result<T> = std::result::Result<T, DeitygenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_errors_have_template_exit_code() {
        let err = DeitygenError::TemplateNotFound("docs/TEMPLATE.md".to_string());
        assert_eq!(err.exit_code(), exit_codes::TEMPLATE_FAILURE);

        let err = DeitygenError::TemplateMalformed("no json block".to_string());
        assert_eq!(err.exit_code(), exit_codes::TEMPLATE_FAILURE);

        let err = DeitygenError::MissingVariable("deity_realm".to_string());
        assert_eq!(err.exit_code(), exit_codes::TEMPLATE_FAILURE);
    }

    #[test]
    fn input_errors_have_user_exit_code() {
        assert_eq!(DeitygenError::MissingTheme.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(
            DeitygenError::MissingField("name".to_string()).exit_code(),
            exit_codes::USER_ERROR
        );
        let err = DeitygenError::UnknownPreset {
            name: "lava_basic".to_string(),
            available: vec![],
        };
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn io_error_has_write_exit_code() {
        let err = DeitygenError::Io("disk full".to_string());
        assert_eq!(err.exit_code(), exit_codes::WRITE_FAILURE);
    }

    #[test]
    fn unknown_preset_lists_available_names() {
        let err = DeitygenError::UnknownPreset {
            name: "lava_basic".to_string(),
            available: vec!["fire_basic".to_string(), "water_basic".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown preset: lava_basic. Available: fire_basic, water_basic"
        );
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = DeitygenError::MissingField("domains".to_string());
        assert_eq!(
            err.to_string(),
            "missing required field 'domains' for theme-based generation"
        );
        assert_eq!(
            DeitygenError::MissingTheme.to_string(),
            "custom config must include a 'theme' field"
        );
    }
}
