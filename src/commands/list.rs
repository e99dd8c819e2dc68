//! Implementation of the `deitygen list` command.

use crate::error::Result;
use crate::presets::{named_presets, themes};

/// Execute the `deitygen list` command.
pub fn cmd_list() -> Result<()> {
    print!("{}", render_listing());
    Ok(())
}

fn render_listing() -> String {
    let mut out = String::from("Themes:\n");
    for theme in themes() {
        out.push_str(&format!(
            "  {:<8} preferred time: {}\n",
            theme.theme,
            theme.get("preferred_time").unwrap_or("any")
        ));
    }

    out.push_str("\nPresets:\n");
    for preset in named_presets() {
        out.push_str(&format!(
            "  {:<12} {}, {} ({})\n",
            preset.name, preset.deity_name, preset.title, preset.domains
        ));
    }
    out
}
