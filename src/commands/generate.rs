//! Implementation of the single-deity commands: `theme`, `preset`, `custom`.

use super::Session;
use crate::cli::{CustomArgs, PresetArgs, ThemeArgs};
use crate::compose::{ComposeRequest, load_custom_request};
use crate::error::Result;
use crate::output::{default_output_path, write_deity};
use crate::presets::named_preset;
use std::path::PathBuf;

/// Execute the `deitygen theme` command.
///
/// Name, title and domains are all required; built-in preset identities are
/// only used by `preset` and `custom`.
pub fn cmd_theme(session: &Session, args: ThemeArgs) -> Result<()> {
    let request = ComposeRequest {
        theme: args.theme,
        name: args.name,
        title: args.title,
        domains: args.domains,
        overrides: Default::default(),
    }
    .with_overrides(args.overrides);
    request.require_identity()?;

    run(session, &request, args.output)
}

/// Execute the `deitygen preset` command.
pub fn cmd_preset(session: &Session, args: PresetArgs) -> Result<()> {
    let preset = named_preset(&args.name)?;
    let request = ComposeRequest::from_preset(preset).with_overrides(args.overrides);

    run(session, &request, args.output)
}

/// Execute the `deitygen custom` command.
pub fn cmd_custom(session: &Session, args: CustomArgs) -> Result<()> {
    let request = load_custom_request(&args.config)?;

    run(session, &request, args.output)
}

/// Generate one deity and write it. Nothing is written if generation fails.
fn run(session: &Session, request: &ComposeRequest, output: Option<PathBuf>) -> Result<()> {
    let deity = session.generator.generate(request)?;
    let path =
        output.unwrap_or_else(|| default_output_path(&session.settings.output_dir, &deity.theme));

    let written = write_deity(&path, &deity)?;

    println!("Generated {} deity: {}", deity.theme, written.display());
    if !deity.unresolved.is_empty() {
        println!(
            "Warning: unresolved placeholders: {}",
            deity.unresolved.join(", ")
        );
    }

    Ok(())
}
