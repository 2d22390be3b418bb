use std::io::Write;
use std::process::{Command, Output, Stdio};

use login_check::LoginOutcome;
use login_check::config::CheckerConfig;
use login_check::error::handlers::EXIT_CONFIG_ERROR;
use login_check::run_session;

// Helper to run a session over in-memory input and capture stdout
async fn run(input: &str, config: &CheckerConfig) -> (LoginOutcome, String) {
    let mut output = Vec::new();
    let outcome = run_session(input.as_bytes(), &mut output, config)
        .await
        .unwrap();
    (outcome, String::from_utf8(output).unwrap())
}

async fn run_quiet(input: &str) -> String {
    run(input, &CheckerConfig::default()).await.1
}

#[tokio::test]
async fn test_scenario_table() {
    let cases = [
        ("admin 1234\n", "Login successful\n"),
        ("admin 12345\n", "Login failed\n"),
        ("Admin 1234\n", "Login failed\n"),
        ("guest 1234\n", "Login failed\n"),
        ("", "Login failed\n"),
    ];

    for (input, expected) in cases {
        assert_eq!(run_quiet(input).await, expected, "input={:?}", input);
    }
}

#[tokio::test]
async fn test_tokens_on_separate_lines() {
    let (outcome, output) = run("admin\n1234\n", &CheckerConfig::default()).await;
    assert_eq!(outcome, LoginOutcome::Success);
    assert_eq!(output, "Login successful\n");
}

#[tokio::test]
async fn test_missing_password_fails() {
    assert_eq!(run_quiet("admin").await, "Login failed\n");
    assert_eq!(run_quiet("admin\n\n   \n").await, "Login failed\n");
}

#[tokio::test]
async fn test_trailing_tokens_ignored() {
    assert_eq!(run_quiet("admin 1234 extra tokens\n").await, "Login successful\n");
}

#[tokio::test]
async fn test_output_is_single_line() {
    for input in ["admin 1234", "guest pw", ""] {
        let output = run_quiet(input).await;
        assert_eq!(output.matches('\n').count(), 1);
        assert!(output.ends_with('\n'));
    }
}

#[tokio::test]
async fn test_repeated_runs_agree() {
    for input in ["admin 1234", "Admin 1234"] {
        assert_eq!(run_quiet(input).await, run_quiet(input).await);
    }
}

#[tokio::test]
async fn test_prompts_precede_outcome_on_same_line() {
    let config = CheckerConfig {
        prompts: true,
        ..CheckerConfig::default()
    };

    let (outcome, output) = run("admin\n1234\n", &config).await;
    assert!(outcome.is_success());
    assert_eq!(output, "Enter username: Enter password: Login successful\n");

    let (outcome, output) = run("guest\n", &config).await;
    assert!(!outcome.is_success());
    assert_eq!(output, "Enter username: Enter password: Login failed\n");
}

// Helper to run the built binary with the given stdin and LOGIN_CHECK_* overrides
fn run_binary(input: &str, env: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_login-check"));
    command
        .current_dir(std::env::temp_dir())
        .env_remove("RUST_LOG")
        .env_remove("LOGIN_CHECK_PROMPTS")
        .env_remove("LOGIN_CHECK_USERNAME_PROMPT")
        .env_remove("LOGIN_CHECK_PASSWORD_PROMPT")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in env {
        command.env(key, value);
    }

    let mut child = command.spawn().unwrap();
    // A run rejected at config load may exit before reading stdin.
    let _ = child.stdin.take().unwrap().write_all(input.as_bytes());
    child.wait_with_output().unwrap()
}

#[test]
fn test_binary_successful_login() {
    let output = run_binary("admin 1234\n", &[]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Login successful\n");
}

#[test]
fn test_binary_failed_login_still_exits_zero() {
    let output = run_binary("guest x\n", &[]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Login failed\n");
}

#[test]
fn test_binary_empty_input_fails() {
    let output = run_binary("", &[]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Login failed\n");
}

#[test]
fn test_binary_logs_stay_off_stdout() {
    let output = run_binary("admin 1234\n", &[("RUST_LOG", "debug")]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Login successful\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("access granted"));
}

#[test]
fn test_binary_prompts_from_env() {
    let output = run_binary("admin\n1234\n", &[("LOGIN_CHECK_PROMPTS", "true")]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Enter username: Enter password: Login successful\n"
    );
}

#[test]
fn test_binary_invalid_config_exits_with_config_status() {
    let output = run_binary(
        "admin 1234\n",
        &[("LOGIN_CHECK_USERNAME_PROMPT", "user\nname: ")],
    );
    assert_eq!(output.status.code(), Some(EXIT_CONFIG_ERROR));
    assert_eq!(EXIT_CONFIG_ERROR, 78);
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("username_prompt"));
}
