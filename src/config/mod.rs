//! Settings for deitygen.
//!
//! Settings live in an optional `deitygen.yaml` in the working directory (or
//! the file named by `--settings`). Unknown fields are ignored and every field
//! has a default, so a missing file behaves like an empty one.

mod model;
mod operations;


pub use model::{Config, DEFAULT_OUTPUT_DIR, SETTINGS_FILE};
