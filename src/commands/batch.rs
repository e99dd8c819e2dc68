//! Implementation of the `deitygen batch` command.

use super::Session;
use crate::cli::BatchArgs;
use crate::error::{DeitygenError, Result};
use crate::output::generate_batch;

/// Execute the `deitygen batch` command.
///
/// Flags override settings: `--output-dir` replaces `output_dir`, and
/// `--keep-going` turns keep-going on.
pub fn cmd_batch(session: &Session, args: BatchArgs) -> Result<()> {
    let settings = &session.settings;
    let dir = args.output_dir.as_deref().unwrap_or(&settings.output_dir);
    let keep_going = args.keep_going || settings.keep_going;

    let report = generate_batch(&session.generator, &settings.batch_themes, dir, keep_going)?;

    for path in &report.written {
        println!("Generated: {}", path.display());
    }

    if report.is_success() {
        println!("Batch complete: {} deities generated", report.written.len());
        return Ok(());
    }

    let failures: Vec<String> = report
        .failed
        .iter()
        .map(|(theme, e)| format!("{}: {}", theme, e))
        .collect();
    Err(DeitygenError::UserError(format!(
        "batch finished with {} failure(s) ({} written):\n  {}",
        report.failed.len(),
        report.written.len(),
        failures.join("\n  ")
    )))
}
