//! login-check - Entry Point
//!
//! Reads a username and password from stdin and reports whether they match.

use log::debug;
use tokio::io::BufReader;

use login_check::config::CheckerConfig;
use login_check::error::CheckerError;
use login_check::error::handlers::{exit_code, handle_error};
use login_check::run_session;
use login_check::utils::setup_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    setup_logging();

    if let Err(e) = run().await {
        handle_error(&e);
        std::process::exit(exit_code(&e));
    }
}

async fn run() -> Result<(), CheckerError> {
    let config = CheckerConfig::load()?;
    debug!("Loaded configuration: {:?}", config);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    // Both outcomes exit with status 0.
    let outcome = run_session(stdin, &mut stdout, &config).await?;
    debug!(
        "Run finished, access {}",
        if outcome.is_success() { "granted" } else { "denied" }
    );
    Ok(())
}
