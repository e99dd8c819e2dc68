//! Template subsystem for deity generation.
//!
//! This module provides:
//!
//! - **Engine**: single-pass `{variable}` substitution, strict and lenient
//! - **Loader**: embedded template or a fenced block from a markdown document
//! - **Deity**: the canonical embedded deity template
//!
//! # Template Syntax
//!
//! Templates use `{variable}` placeholders. Use `{{` and `}}` to render literal
//! braces, which the deity template does for all JSON object syntax.

mod deity;
mod engine;
mod loader;

pub use deity::{DEITY_TEMPLATE, TASK_CONFIG_SLOT};
pub use engine::{Rendered, TemplateError, render_lenient_with, render_template, render_with};
pub use loader::{TemplateSource, extract_template_block, load_document};

#[cfg(test)]
pub use engine::vars;
