//! Template engine for variable substitution.
//!
//! This module performs `{variable}` substitution in strings. It is used for:
//!
//! - The deity document template (lenient: unknown placeholders are reported)
//! - Narrative strings in the task configuration (strict: unknown is an error)
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of variable `name`
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! Substitution is a single left-to-right pass. A substituted value is copied
//! into the output as-is and never scanned for further placeholders.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Error type for strict template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    UndefinedVariable {
        /// The name of the undefined variable.
        name: String,
        /// The position in the template where the variable was found.
        position: usize,
    },
    /// A `{` was found without a matching `}`.
    UnmatchedBrace {
        /// The position of the unmatched `{`.
        position: usize,
    },
    /// An empty variable name was found (e.g., `{}`).
    EmptyVariableName {
        /// The position of the empty variable.
        position: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedVariable { name, position } => {
                write!(
                    f,
                    "undefined variable '{}' at position {} in template",
                    name, position
                )
            }
            TemplateError::UnmatchedBrace { position } => {
                write!(f, "unmatched '{{' at position {} in template", position)
            }
            TemplateError::EmptyVariableName { position } => {
                write!(
                    f,
                    "empty variable name '{{}}' at position {} in template",
                    position
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Output of a lenient render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The rendered text. Unresolved placeholders are left verbatim.
    pub text: String,
    /// Names of placeholders that had no value, in first-seen order.
    pub unresolved: Vec<String>,
}

impl Rendered {
    /// Whether every placeholder in the template was resolved.
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// One lexical piece of a template.
enum Token<'a> {
    Literal(char),
    Placeholder { name: &'a str, raw: &'a str, position: usize },
    Unmatched { raw: &'a str, position: usize },
    Empty { position: usize },
}

/// Walk `template` and hand every token to `emit`.
///
/// Stops at the first error `emit` returns.
fn scan<'a, E>(
    template: &'a str,
    mut emit: impl FnMut(Token<'a>) -> Result<(), E>,
) -> Result<(), E> {
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    emit(Token::Literal('{'))?;
                    continue;
                }

                let body_start = pos + 1;
                let mut close = None;
                for (idx, c) in chars.by_ref() {
                    if c == '}' {
                        close = Some(idx);
                        break;
                    }
                }

                match close {
                    None => {
                        emit(Token::Unmatched {
                            raw: &template[pos..],
                            position: pos,
                        })?;
                    }
                    Some(end) if end == body_start => emit(Token::Empty { position: pos })?,
                    Some(end) => emit(Token::Placeholder {
                        // Whitespace around the name is tolerated
                        name: template[body_start..end].trim(),
                        raw: &template[pos..=end],
                        position: pos,
                    })?,
                }
            }
            '}' => {
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                }
                emit(Token::Literal('}'))?;
            }
            _ => emit(Token::Literal(ch))?,
        }
    }

    Ok(())
}

/// Render a template, failing on the first placeholder `resolve` cannot answer.
pub fn render_with<'v>(
    template: &str,
    mut resolve: impl FnMut(&str) -> Option<Cow<'v, str>>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());

    scan(template, |token| {
        match token {
            Token::Literal(c) => result.push(c),
            Token::Placeholder { name, position, .. } => match resolve(name) {
                Some(value) => result.push_str(&value),
                None => {
                    return Err(TemplateError::UndefinedVariable {
                        name: name.to_string(),
                        position,
                    });
                }
            },
            Token::Unmatched { position, .. } => {
                return Err(TemplateError::UnmatchedBrace { position });
            }
            Token::Empty { position } => {
                return Err(TemplateError::EmptyVariableName { position });
            }
        }
        Ok(())
    })?;

    Ok(result)
}

/// Render a template, leaving unknown placeholders in place and reporting them.
///
/// Malformed braces (`{}` or a trailing unmatched `{`) are copied literally.
pub fn render_lenient_with<'v>(
    template: &str,
    mut resolve: impl FnMut(&str) -> Option<Cow<'v, str>>,
) -> Rendered {
    let mut text = String::with_capacity(template.len());
    let mut unresolved = Vec::new();
    let mut seen = HashSet::new();

    let _ = scan::<std::convert::Infallible>(template, |token| {
        match token {
            Token::Literal(c) => text.push(c),
            Token::Placeholder { name, raw, .. } => match resolve(name) {
                Some(value) => text.push_str(&value),
                None => {
                    text.push_str(raw);
                    if seen.insert(name) {
                        unresolved.push(name.to_string());
                    }
                }
            },
            Token::Unmatched { raw, .. } => text.push_str(raw),
            Token::Empty { .. } => text.push_str("{}"),
        }
        Ok(())
    });

    Rendered { text, unresolved }
}

/// Render a template string by substituting variables.
///
/// Undefined variables are an error rather than silently rendering as empty.
pub fn render_template(
    template: &str,
    variables: &BTreeMap<String, String>,
) -> Result<String, TemplateError> {
    render_with(template, |name| variables.get(name).map(|v| Cow::Borrowed(v.as_str())))
}

/// Helper to create a variables map from a list of key-value pairs.
#[cfg(test)]
pub fn vars<I, K, V>(pairs: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
