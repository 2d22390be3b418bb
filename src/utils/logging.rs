//! Logging utilities
//!
//! Log records go to stderr so stdout carries only prompts and the outcome.

use env_logger::{Builder, Env, Target};

/// Setup logging for a run (honours `RUST_LOG`, defaults to warnings)
pub fn setup_logging() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .init();
}
