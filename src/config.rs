//! Configuration management for login-check
//!
//! Only presentation is configurable. The expected credentials are constants
//! in `auth::credentials` and never come from configuration.

use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Optional config file looked up in the working directory (`login_check.toml`).
pub const CONFIG_FILE: &str = "login_check";

/// Prefix for environment overrides, e.g. `LOGIN_CHECK_PROMPTS=true`.
pub const ENV_PREFIX: &str = "LOGIN_CHECK";

const DEFAULT_USERNAME_PROMPT: &str = "Enter username: ";
const DEFAULT_PASSWORD_PROMPT: &str = "Enter password: ";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Write the prompts to stdout before reading each credential
    /// Environment: LOGIN_CHECK_PROMPTS
    pub prompts: bool,

    /// Environment: LOGIN_CHECK_USERNAME_PROMPT
    pub username_prompt: String,

    /// Environment: LOGIN_CHECK_PASSWORD_PROMPT
    pub password_prompt: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            prompts: false,
            username_prompt: DEFAULT_USERNAME_PROMPT.to_string(),
            password_prompt: DEFAULT_PASSWORD_PROMPT.to_string(),
        }
    }
}

impl CheckerConfig {
    /// Load configuration from defaults, `login_check.toml` and the environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(CONFIG_FILE, Self::environment())
    }

    /// `LOGIN_CHECK_*` variables, kept as strings so prompts like `007` survive intact
    pub fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
    }

    /// Layer an optional config file and an environment source over the defaults
    pub fn load_with(file: &str, env: Environment) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name(file).required(false))
            .add_source(env);

        Self::from_builder(builder)
    }

    /// Apply defaults underneath the given sources, then deserialize and validate
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let settings = builder
            .set_default("prompts", defaults.prompts)?
            .set_default("username_prompt", defaults.username_prompt)?
            .set_default("password_prompt", defaults.password_prompt)?
            .build()?;

        let config: CheckerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Prompts share the single output line, so they may not break it
    fn validate(&self) -> Result<(), ConfigError> {
        for (name, prompt) in [
            ("username_prompt", &self.username_prompt),
            ("password_prompt", &self.password_prompt),
        ] {
            if prompt.contains(['\r', '\n']) {
                return Err(ConfigError::Message(format!(
                    "{} cannot contain line breaks",
                    name
                )));
            }
        }

        Ok(())
    }
}
