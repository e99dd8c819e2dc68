//! Command implementations for deitygen.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, and the [`Session`] every generating command shares:
//! resolved settings plus the loaded template.

mod batch;
mod generate;
mod list;

use crate::cli::{Command, GlobalArgs};
use crate::config::Config;
use crate::error::Result;
use crate::generator::Generator;
use crate::template::TemplateSource;

/// Settings and template resolved once per invocation.
#[derive(Debug)]
pub struct Session {
    pub settings: Config,
    pub generator: Generator,
}

impl Session {
    /// Resolve settings, then load the template (`--template` over settings).
    pub fn open(global: &GlobalArgs) -> Result<Self> {
        let settings = Config::discover(global.settings.as_deref())?;
        let template = global.template.clone().or_else(|| settings.template.clone());
        let generator = Generator::new(&TemplateSource::from_option(template))?;
        Ok(Self {
            settings,
            generator,
        })
    }
}

/// Dispatch a command to its implementation.
pub fn dispatch(global: &GlobalArgs, command: Command) -> Result<()> {
    match command {
        Command::List => list::cmd_list(),
        Command::Theme(args) => generate::cmd_theme(&Session::open(global)?, args),
        Command::Preset(args) => generate::cmd_preset(&Session::open(global)?, args),
        Command::Custom(args) => generate::cmd_custom(&Session::open(global)?, args),
        Command::Batch(args) => batch::cmd_batch(&Session::open(global)?, args),
    }
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use super::Session;
    use crate::config::Config;
    use crate::generator::Generator;
    use std::path::Path;

    /// A session over the embedded template writing into `output_dir`.
    pub fn session_in(output_dir: &Path) -> Session {
        Session {
            settings: Config {
                output_dir: output_dir.to_path_buf(),
                ..Config::default()
            },
            generator: Generator::embedded(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeitygenError;
    use tempfile::TempDir;

    #[test]
    fn test_session_uses_template_flag() {
        let temp_dir = TempDir::new().unwrap();
        let global = GlobalArgs {
            template: Some(temp_dir.path().join("missing.md")),
            settings: Some(temp_dir.path().join("settings.yaml")),
            ..GlobalArgs::default()
        };
        std::fs::write(temp_dir.path().join("settings.yaml"), "keep_going: true\n").unwrap();

        let err = Session::open(&global).unwrap_err();
        assert!(matches!(err, DeitygenError::TemplateNotFound(_)));
    }

    #[test]
    fn test_session_reads_template_from_settings() {
        let temp_dir = TempDir::new().unwrap();
        let template = temp_dir.path().join("TEMPLATE.md");
        std::fs::write(&template, "# Deity\n\n```json\n{{\"deity\": \"{deity_id}\"}}\n```\n")
            .unwrap();
        let settings = temp_dir.path().join("settings.yaml");
        std::fs::write(&settings, format!("template: {}\n", template.display())).unwrap();

        let global = GlobalArgs {
            settings: Some(settings),
            ..GlobalArgs::default()
        };
        let session = Session::open(&global).unwrap();
        assert_eq!(session.settings.template, Some(template));
    }

    #[test]
    fn test_document_template_renders_task_slot() {
        let temp_dir = TempDir::new().unwrap();
        let template = temp_dir.path().join("TEMPLATE.md");
        std::fs::write(
            &template,
            concat!(
                "# Deity Template\n\n",
                "```json\n",
                "{{\n",
                "  \"deity\": \"eidolonunchained:{deity_id}\",\n",
                "  \"name\": \"{deity_name}, {deity_title}\",\n",
                "  {task_config_json}\n",
                "}}\n",
                "```\n",
            ),
        )
        .unwrap();

        let global = GlobalArgs {
            template: Some(template),
            settings: Some(temp_dir.path().join("settings.yaml")),
            ..GlobalArgs::default()
        };
        std::fs::write(temp_dir.path().join("settings.yaml"), "keep_going: false\n").unwrap();

        let session = Session::open(&global).unwrap();
        let preset = crate::presets::named_preset("earth_basic").unwrap();
        let deity = session
            .generator
            .generate(&crate::compose::ComposeRequest::from_preset(preset))
            .unwrap();

        assert!(deity.unresolved.is_empty());
        let json: serde_json::Value = serde_json::from_str(&deity.text).unwrap();
        assert_eq!(json["deity"], "eidolonunchained:earth_deity");
        assert_eq!(json["name"], "Gaia, Mother of Stone");
        assert_eq!(
            json["task_config"]["available_tasks"].as_array().unwrap().len(),
            5
        );
    }

    #[test]
    fn test_missing_settings_file_fails_before_generation() {
        let temp_dir = TempDir::new().unwrap();
        let global = GlobalArgs {
            settings: Some(temp_dir.path().join("absent.yaml")),
            ..GlobalArgs::default()
        };
        // `list` needs no session, so it still succeeds.
        assert!(dispatch(&global, Command::List).is_ok());

        let err = Session::open(&global).unwrap_err();
        assert!(matches!(err, DeitygenError::UserError(_)));
    }
}
