//! Credential checking
//!
//! Compares a supplied username and password against the fixed expected pair.

pub mod credentials;
pub mod results;
pub mod validator;

pub use credentials::Credentials;
pub use results::LoginOutcome;
pub use validator::{check_login, verify};
