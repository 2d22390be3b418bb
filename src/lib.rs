pub mod auth;
pub mod config;
pub mod error;
pub mod session;
pub mod utils;

pub use auth::{Credentials, LoginOutcome, check_login};
pub use session::run_session;
