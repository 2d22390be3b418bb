use log::{info, warn};
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};

use crate::auth::{Credentials, LoginOutcome, check_login};
use crate::config::CheckerConfig;
use crate::error::CheckerError;
use crate::session::reader::TokenReader;

/// Runs one login check: reads username then password, writes the outcome line.
///
/// A credential missing at end of input is taken as empty, which always fails.
pub async fn run_session<R, W>(
    reader: R,
    writer: &mut W,
    config: &CheckerConfig,
) -> Result<LoginOutcome, CheckerError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut tokens = TokenReader::new(reader);

    if config.prompts {
        write_prompt(writer, &config.username_prompt).await?;
    }
    let username = read_credential(&mut tokens, "username").await?;

    if config.prompts {
        write_prompt(writer, &config.password_prompt).await?;
    }
    let password = read_credential(&mut tokens, "password").await?;

    let credentials = Credentials { username, password };
    let outcome = check_login(&credentials);

    writer.write_all(format!("{}\n", outcome).as_bytes()).await?;
    writer.flush().await?;

    info!("Login attempt for {:?}: {}", credentials.username, outcome);
    Ok(outcome)
}

async fn write_prompt<W: AsyncWrite + Unpin>(
    writer: &mut W,
    prompt: &str,
) -> std::io::Result<()> {
    writer.write_all(prompt.as_bytes()).await?;
    writer.flush().await
}

async fn read_credential<R: AsyncBufRead + Unpin>(
    tokens: &mut TokenReader<R>,
    field: &str,
) -> std::io::Result<String> {
    match tokens.next_token().await? {
        Some(value) => Ok(value),
        None => {
            warn!("Input ended before {} was read; treating it as empty", field);
            Ok(String::new())
        }
    }
}
