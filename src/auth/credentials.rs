//! Credential values
//!
//! Holds the expected credential pair and the type carrying user-supplied values.

use std::fmt;

/// Username that grants a successful login.
pub const EXPECTED_USERNAME: &str = "admin";

/// Password that grants a successful login.
pub const EXPECTED_PASSWORD: &str = "1234";

/// A username and password as read from input, compared verbatim.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Password stays out of debug output and logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
