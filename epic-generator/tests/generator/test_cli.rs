//! End-to-end tests for the `epic-generator` binary

use super::common::*;
use assert_cmd::Command;
use epic_generator::cli::DEFAULT_DESCRIPTION;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Binary command isolated from the caller's environment and env files
fn command(server: &MockServer, workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("epic-generator").unwrap();
    cmd.current_dir(workdir)
        .env_remove("RUST_LOG")
        .env("OPENAI_API_KEY", "sk-test")
        .env("OPENAI_BASE_URL", format!("{}/v1", server.uri()))
        .arg("--env-file")
        .arg(workdir.join("missing.env"));
    cmd
}

async fn mount_reply(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body(content)))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_stdout_is_only_pretty_json() {
    let server = MockServer::start().await;
    let workdir = tempfile::tempdir().unwrap();
    let expected = sample_artifacts();
    mount_reply(&server, &format!("Here it is: {} Enjoy!", expected)).await;

    let output = command(&server, workdir.path())
        .arg("A bike sharing platform")
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(
        stdout,
        format!("{}\n", serde_json::to_string_pretty(&expected).unwrap())
    );
    let parsed: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed, expected);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_description_uses_placeholder() {
    let server = MockServer::start().await;
    let workdir = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains(DEFAULT_DESCRIPTION))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_completion_body(&sample_artifacts().to_string())),
        )
        .expect(1)
        .mount(&server)
        .await;

    command(&server, workdir.path()).assert().success();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_decode_failure_exits_nonzero_without_stdout() {
    let server = MockServer::start().await;
    let workdir = tempfile::tempdir().unwrap();
    mount_reply(&server, "{ this is not json }").await;

    command(&server, workdir.path())
        .arg("anything")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("LLM output was not valid JSON"))
        .stderr(predicate::str::contains("{ this is not json }"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_validate_flag_rejects_wrong_shape() {
    let server = MockServer::start().await;
    let workdir = tempfile::tempdir().unwrap();
    mount_reply(&server, r#"{"features": []}"#).await;

    command(&server, workdir.path())
        .args(["--validate", "anything"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("artifact schema"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_key_is_read_from_env_file() {
    let server = MockServer::start().await;
    let workdir = tempfile::tempdir().unwrap();
    let env_file = workdir.path().join("custom.env");
    std::fs::write(&env_file, "OPENAI_API_KEY=sk-from-file\n").unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-from-file"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_completion_body(&sample_artifacts().to_string())),
        )
        .expect(1)
        .mount(&server)
        .await;

    Command::cargo_bin("epic-generator")
        .unwrap()
        .current_dir(workdir.path())
        .env_remove("RUST_LOG")
        .env_remove("OPENAI_API_KEY")
        .env("OPENAI_BASE_URL", format!("{}/v1", server.uri()))
        .arg("--env-file")
        .arg(&env_file)
        .arg("desc")
        .assert()
        .success();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_api_key_fails() {
    let server = MockServer::start().await;
    let workdir = tempfile::tempdir().unwrap();

    command(&server, workdir.path())
        .env_remove("OPENAI_API_KEY")
        .arg("desc")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_log_filter_is_read_from_env_file() {
    let server = MockServer::start().await;
    let workdir = tempfile::tempdir().unwrap();
    let env_file = workdir.path().join("debug.env");
    std::fs::write(&env_file, "RUST_LOG=debug\n").unwrap();
    let expected = sample_artifacts();
    mount_reply(&server, &expected.to_string()).await;

    let output = Command::cargo_bin("epic-generator")
        .unwrap()
        .current_dir(workdir.path())
        .env_remove("RUST_LOG")
        .env("OPENAI_API_KEY", "sk-test")
        .env("OPENAI_BASE_URL", format!("{}/v1", server.uri()))
        .arg("--env-file")
        .arg(&env_file)
        .arg("desc")
        .assert()
        .success()
        .stderr(predicate::str::contains("Loaded env file"))
        .get_output()
        .stdout
        .clone();

    let parsed: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed, expected);
}
