//! Filesystem utilities for deitygen.
//!
//! Generated files are always written atomically so an interrupted run never
//! leaves a truncated deity configuration behind.

pub mod atomic;

pub use atomic::atomic_write_file;
