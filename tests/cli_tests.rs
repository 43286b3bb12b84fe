mod common;

use common::{run_vidsum, TestEnv};

#[test]
fn vidsum_help_shows_usage() {
    let output = run_vidsum(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--help should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("summarize"));
    assert!(stdout.contains("session"));
}

#[test]
fn vidsum_version_shows_version() {
    let output = run_vidsum(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("vidsum "));
}

#[test]
fn completions_bash_outputs_script() {
    let output = run_vidsum(&["completions", "bash"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "completions bash should succeed");
    assert!(
        stdout.contains("vidsum"),
        "expected completion output to reference command name\nstdout:\n{}",
        stdout
    );
}

#[test]
fn config_show_works_without_config_file() {
    let output = run_vidsum(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "config show should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("[session]"));
    assert!(stdout.contains("[providers.github]"));
    assert!(stdout.contains("for_demo"));
}

#[test]
fn config_show_redacts_api_keys() {
    let env = TestEnv::new();
    env.write_config(
        r#"
[providers.github]
api_key = "ghp_super_secret"
"#,
    );

    let output = env.run(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(!stdout.contains("ghp_super_secret"));
    assert!(stdout.contains("********"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let env = TestEnv::new();

    let first = env.run(&["config", "init"]);
    assert!(first.status.success(), "first init should succeed");
    assert!(env.config_path().exists());

    let second = env.run(&["config", "init"]);
    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(!second.status.success());
    assert!(stderr.contains("already exists"), "stderr:\n{}", stderr);

    let forced = env.run(&["config", "init", "--force"]);
    assert!(forced.status.success());
}

#[test]
fn link_prints_timestamp_url() {
    let output = run_vidsum(&["link", "abc123", "1:30"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert_eq!(stdout.trim(), "https://www.youtube.com/watch?v=abc123&t=90");
}

#[test]
fn link_rejects_malformed_timestamp() {
    let output = run_vidsum(&["link", "abc123", "ninety"]);
    assert!(!output.status.success());
}
