//! End-to-end tests for the `deploy` command.
//!
//! Invariants:
//! - Every listed index is deleted and every JSON file is posted.
//! - The final index list is printed to stdout.
//! - The failure policy decides the exit code when items fail.

mod common;

use common::{deploy_cmd_with_endpoint, index_list};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn index_folder() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("idx1.json"), r#"{"name":"idx1"}"#).unwrap();
    fs::create_dir(dir.path().join("more")).unwrap();
    fs::write(dir.path().join("more/idx2.json"), r#"{"name":"idx2"}"#).unwrap();
    fs::write(dir.path().join("notes.txt"), "skip me").unwrap();
    dir
}

async fn mount_lists(server: &MockServer, before: &[&str], after: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/indexes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(index_list(before)))
        .up_to_n_times(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/indexes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(index_list(after)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_deploy_replaces_indexes_and_prints_final_list() {
    let server = MockServer::start().await;
    let dir = index_folder();

    mount_lists(&server, &["old-a", "old-b"], &["idx1", "idx2"]).await;
    for name in ["old-a", "old-b"] {
        Mock::given(method("DELETE"))
            .and(path(format!("/indexes/{name}")))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
    }
    for body in [r#"{"name":"idx1"}"#, r#"{"name":"idx2"}"#] {
        Mock::given(method("POST"))
            .and(path("/indexes"))
            .and(body_string(body))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;
    }

    deploy_cmd_with_endpoint(&server.uri())
        .args(["deploy", "--pause-seconds", "0", "--index-folder"])
        .arg(dir.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Deleted: 2/2\tCreated: 2\tFailed: 0"))
        .stdout(predicate::str::contains("Name\nidx1\nidx2\n"));
}

#[tokio::test]
async fn test_deploy_reads_folder_from_env() {
    let server = MockServer::start().await;
    let dir = index_folder();

    mount_lists(&server, &[], &["idx1", "idx2"]).await;
    Mock::given(method("POST"))
        .and(path("/indexes"))
        .respond_with(ResponseTemplate::new(201))
        .expect(2)
        .mount(&server)
        .await;

    deploy_cmd_with_endpoint(&server.uri())
        .env("AZSEARCH_INDEX_FOLDER", dir.path())
        .env("AZSEARCH_PAUSE_SECONDS", "0")
        .args(["--output", "json", "deploy"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"final_indexes\""));
}

#[tokio::test]
async fn test_item_failure_tolerated_by_default() {
    let server = MockServer::start().await;
    let dir = index_folder();

    mount_lists(&server, &["a"], &["a", "idx1", "idx2"]).await;
    Mock::given(method("DELETE"))
        .and(path("/indexes/a"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/indexes"))
        .respond_with(ResponseTemplate::new(201))
        .expect(2)
        .mount(&server)
        .await;

    deploy_cmd_with_endpoint(&server.uri())
        .args(["deploy", "--index-folder"])
        .arg(dir.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("delete\ta\tinternal (500)"));
}

#[tokio::test]
async fn test_fail_at_end_returns_exit_code_5() {
    let server = MockServer::start().await;
    let dir = index_folder();

    mount_lists(&server, &["a"], &["a", "idx1", "idx2"]).await;
    Mock::given(method("DELETE"))
        .and(path("/indexes/a"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/indexes"))
        .respond_with(ResponseTemplate::new(201))
        .expect(2)
        .mount(&server)
        .await;

    deploy_cmd_with_endpoint(&server.uri())
        .args(["deploy", "--failure-policy", "fail-at-end", "--index-folder"])
        .arg(dir.path())
        .assert()
        .code(5)
        .stderr(predicate::str::contains("1 failed operation(s)"));
}

#[tokio::test]
async fn test_fail_fast_skips_remaining_items() {
    let server = MockServer::start().await;
    let dir = index_folder();

    mount_lists(&server, &["a", "b"], &["a", "b"]).await;
    Mock::given(method("DELETE"))
        .and(path("/indexes/a"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/indexes/b"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    deploy_cmd_with_endpoint(&server.uri())
        .env("AZSEARCH_FAILURE_POLICY", "fail-fast")
        .args(["deploy", "--index-folder"])
        .arg(dir.path())
        .assert()
        .code(5)
        .stderr(predicate::str::contains("stopped early"));
}

#[tokio::test]
async fn test_api_key_never_printed() {
    let server = MockServer::start().await;
    let dir = index_folder();

    mount_lists(&server, &[], &[]).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad"))
        .mount(&server)
        .await;

    deploy_cmd_with_endpoint(&server.uri())
        .args(["deploy", "--index-folder"])
        .arg(dir.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains(common::TEST_API_KEY).not())
        .stderr(predicate::str::contains(common::TEST_API_KEY).not());
}
