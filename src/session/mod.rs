//! Login session
//!
//! Drives one run: prompts, token input, the credential check and the outcome line.

pub mod core;
pub mod reader;

pub use self::core::run_session;
pub use reader::TokenReader;
