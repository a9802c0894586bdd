// --- File: crates/gdbc_common/src/lib.rs ---

pub mod logging; // Logging utilities

// Re-export logging utilities for easier access
pub use logging::{init, init_from_config, init_with_level, log_error, log_result};

// This crate provides functionality shared by the gdbc crates.
