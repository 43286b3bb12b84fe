mod common;

use common::{run_vidsum, TestEnv};

#[test]
fn summarize_subcommand_is_available() {
    let output = run_vidsum(&["summarize", "--help"]);

    assert!(
        output.status.success(),
        "summarize --help should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn summarize_requires_credentials_file() {
    let output = run_vidsum(&["summarize", "https://www.youtube.com/watch?v=abc123"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "summarize should fail without config");
    assert!(
        stderr.contains("Credentials file not found"),
        "expected missing credentials error, got:\n{}",
        stderr
    );
}

#[test]
fn session_requires_credentials_file() {
    let output = run_vidsum(&["session"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Credentials file not found"), "stderr:\n{}", stderr);
}

#[test]
fn summarize_reports_unreachable_transcript_service() {
    let env = TestEnv::new();
    env.write_config(
        r#"
[transcript]
endpoint = "http://127.0.0.1:9/transcript"

[providers.github]
api_key = "test-key"
"#,
    );

    let output = env.run(&["summarize", "https://www.youtube.com/watch?v=abc123"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("Error fetching transcript."),
        "expected fetch error, got:\n{}",
        stderr
    );
}
