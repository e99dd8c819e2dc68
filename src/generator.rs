//! The generation pipeline: compose → build tasks → render template.
//!
//! Each call is a pure function of the template and the request; nothing is
//! cached between deities, so re-running with the same inputs yields
//! byte-identical output.

use crate::compose::{self, ComposeRequest, Variables};
use crate::error::Result;
use crate::tasks;
use crate::template::{Rendered, TASK_CONFIG_SLOT, TemplateSource, render_lenient_with};
use std::borrow::Cow;
use tracing::{debug, warn};

/// A rendered deity configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDeity {
    /// Theme the deity was composed from.
    pub theme: String,
    /// The rendered JSON text.
    pub text: String,
    /// Placeholders the mapping could not resolve (a warning, not an error).
    pub unresolved: Vec<String>,
}

/// Renders deity configurations from one loaded template.
#[derive(Debug, Clone)]
pub struct Generator {
    template: Cow<'static, str>,
}

impl Generator {
    /// Load the template from `source`.
    pub fn new(source: &TemplateSource) -> Result<Self> {
        debug!(?source, "loading template");
        Ok(Self {
            template: source.load()?,
        })
    }

    /// A generator over the embedded template.
    pub fn embedded() -> Self {
        Self {
            template: Cow::Borrowed(crate::template::DEITY_TEMPLATE),
        }
    }

    /// A generator over arbitrary template text.
    #[cfg(test)]
    pub fn from_text(template: impl Into<String>) -> Self {
        Self {
            template: Cow::Owned(template.into()),
        }
    }

    /// Compose the request and render it.
    pub fn generate(&self, request: &ComposeRequest) -> Result<GeneratedDeity> {
        let vars = compose::compose(request)?;
        self.render(&vars)
    }

    /// Render an already composed mapping.
    pub fn render(&self, vars: &Variables) -> Result<GeneratedDeity> {
        let theme = vars.require("deity_theme")?.to_string();
        let task_config = tasks::build_task_config(vars)?;
        let fragment = tasks::render_fragment(&task_config)?;

        let rendered = render_lenient_with(&self.template, |name| {
            if name == TASK_CONFIG_SLOT {
                Some(Cow::Borrowed(fragment.as_str()))
            } else {
                vars.get(name).map(|value| Cow::Owned(json_escape(value)))
            }
        });

        if !rendered.is_complete() {
            warn!(
                theme = %theme,
                unresolved = %rendered.unresolved.join(", "),
                "unresolved template variables"
            );
        }
        let Rendered { text, unresolved } = rendered;

        Ok(GeneratedDeity {
            theme,
            text,
            unresolved,
        })
    }
}

/// Escape a value for use inside a JSON string literal.
fn json_escape(value: &str) -> String {
    let quoted = serde_json::Value::from(value).to_string();
    quoted[1..quoted.len() - 1].to_string()
}
