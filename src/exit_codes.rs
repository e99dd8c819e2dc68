//! Exit code constants for the deitygen CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown preset, missing field or theme)
//! - 2: Template failure (missing/malformed template, missing narrative variable)
//! - 3: Write failure (output could not be persisted)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown preset, or incomplete input.
pub const USER_ERROR: i32 = 1;

/// Template failure: template source missing or malformed, or a narrative
/// string referenced a variable that was never composed.
pub const TEMPLATE_FAILURE: i32 = 2;

/// Write failure: output directory or file could not be written.
pub const WRITE_FAILURE: i32 = 3;
