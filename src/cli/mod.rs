//! CLI argument parsing for deitygen.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Deitygen: generate Eidolon Unchained deity configurations from templates.
///
/// Every deity is composed from a theme preset, the caller's identity fields
/// and optional `key=value` overrides, then rendered into the deity template.
#[derive(Parser, Debug)]
#[command(name = "deitygen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Settings file (default: ./deitygen.yaml when present).
    #[arg(long, global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Template document to read instead of the embedded template.
    #[arg(long, global = true, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands for deitygen.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a deity for a theme with an explicit identity.
    Theme(ThemeArgs),

    /// Generate a deity from a built-in preset.
    ///
    /// Accepts a preset name (`fire_basic`) or a bare theme (`fire`).
    Preset(PresetArgs),

    /// Generate a deity from a custom JSON variable file.
    ///
    /// The file must contain a `theme` field; other keys override variables.
    Custom(CustomArgs),

    /// Generate one deity per configured theme.
    Batch(BatchArgs),

    /// List themes and built-in presets.
    List,
}

/// Arguments for the `theme` command.
#[derive(Parser, Debug)]
pub struct ThemeArgs {
    /// Theme to draw defaults from (fire, water, earth, air).
    ///
    /// Any other lowercase theme has no defaults: every task variable
    /// (resource_type, entity_type, counts, colors, ...) must then be given
    /// with --set.
    pub theme: String,

    /// Deity name (required).
    #[arg(long)]
    pub name: Option<String>,

    /// Deity title, e.g. "Lord of Flames" (required).
    #[arg(long)]
    pub title: Option<String>,

    /// Domain description, e.g. "fire and forge" (required).
    #[arg(long)]
    pub domains: Option<String>,

    /// Override a variable (repeatable).
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub overrides: Vec<(String, String)>,

    /// Output file (default: <output_dir>/<theme>_deity.json).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `preset` command.
#[derive(Parser, Debug)]
pub struct PresetArgs {
    /// Preset name or theme.
    pub name: String,

    /// Override a variable (repeatable).
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub overrides: Vec<(String, String)>,

    /// Output file (default: <output_dir>/<theme>_deity.json).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `custom` command.
#[derive(Parser, Debug)]
pub struct CustomArgs {
    /// JSON file with a `theme` field and variable overrides.
    pub config: PathBuf,

    /// Output file (default: <output_dir>/<theme>_deity.json).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `batch` command.
#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// Directory to write into (default: settings output_dir).
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Continue past a failing theme and report failures at the end.
    #[arg(long)]
    pub keep_going: bool,
}

/// Parse a `key=value` override. The value may contain `=`.
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_theme() {
        let cli = Cli::try_parse_from([
            "deitygen",
            "theme",
            "fire",
            "--name",
            "Ignis",
            "--title",
            "Lord of Flames",
            "--domains",
            "fire and forge",
            "--set",
            "deity_color=gold",
            "-o",
            "out/ignis.json",
        ])
        .unwrap();
        if let Command::Theme(args) = cli.command {
            assert_eq!(args.theme, "fire");
            assert_eq!(args.name.as_deref(), Some("Ignis"));
            assert_eq!(args.title.as_deref(), Some("Lord of Flames"));
            assert_eq!(args.domains.as_deref(), Some("fire and forge"));
            assert_eq!(
                args.overrides,
                vec![("deity_color".to_string(), "gold".to_string())]
            );
            assert_eq!(args.output, Some(PathBuf::from("out/ignis.json")));
        } else {
            panic!("Expected Theme command");
        }
    }

    #[test]
    fn theme_help_explains_unknown_themes() {
        let mut command = Cli::command();
        let theme = command.find_subcommand_mut("theme").unwrap();
        let help = theme.render_long_help().to_string();

        assert!(help.contains("resource_type"));
        assert!(help.contains("(required)"));
    }

    #[test]
    fn parse_preset_with_repeated_overrides() {
        let cli = Cli::try_parse_from([
            "deitygen",
            "preset",
            "water_basic",
            "--set",
            "deity_realm=the drowned halls",
            "--set",
            "count_1=3",
        ])
        .unwrap();
        if let Command::Preset(args) = cli.command {
            assert_eq!(args.name, "water_basic");
            assert_eq!(args.overrides.len(), 2);
            assert_eq!(args.overrides[1].1, "3");
            assert!(args.output.is_none());
        } else {
            panic!("Expected Preset command");
        }
    }

    #[test]
    fn parse_custom() {
        let cli = Cli::try_parse_from(["deitygen", "custom", "chaos.json"]).unwrap();
        if let Command::Custom(args) = cli.command {
            assert_eq!(args.config, PathBuf::from("chaos.json"));
        } else {
            panic!("Expected Custom command");
        }
    }

    #[test]
    fn parse_batch() {
        let cli =
            Cli::try_parse_from(["deitygen", "batch", "--output-dir", "out", "--keep-going"])
                .unwrap();
        if let Command::Batch(args) = cli.command {
            assert_eq!(args.output_dir, Some(PathBuf::from("out")));
            assert!(args.keep_going);
        } else {
            panic!("Expected Batch command");
        }
    }

    #[test]
    fn parse_list() {
        let cli = Cli::try_parse_from(["deitygen", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "deitygen",
            "batch",
            "-vv",
            "--template",
            "docs/TEMPLATE.md",
            "--settings",
            "ci.yaml",
        ])
        .unwrap();
        assert_eq!(cli.global.verbose, 2);
        assert!(!cli.global.quiet);
        assert_eq!(cli.global.template, Some(PathBuf::from("docs/TEMPLATE.md")));
        assert_eq!(cli.global.settings, Some(PathBuf::from("ci.yaml")));
    }

    #[test]
    fn reject_missing_subcommand() {
        assert!(Cli::try_parse_from(["deitygen"]).is_err());
    }

    #[test]
    fn reject_malformed_override() {
        assert!(Cli::try_parse_from(["deitygen", "preset", "fire", "--set", "oops"]).is_err());
    }

    #[test]
    fn key_value_parsing() {
        assert_eq!(
            parse_key_value("a=b=c").unwrap(),
            ("a".to_string(), "b=c".to_string())
        );
        assert_eq!(
            parse_key_value(" key =").unwrap(),
            ("key".to_string(), String::new())
        );
        assert!(parse_key_value("=x").is_err());
        assert!(parse_key_value("novalue").is_err());
    }
}
