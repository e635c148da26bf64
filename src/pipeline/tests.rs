use super::*;
use crate::config::GeneratorConfig;
use crate::error::EnvgenError;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn scratch() -> (TempDir, GeneratorConfig) {
    let dir = tempfile::tempdir().unwrap();
    let cfg = GeneratorConfig::in_dir(dir.path());
    (dir, cfg)
}

async fn run_blocking(cfg: GeneratorConfig) -> crate::error::Result<RunReport> {
    tokio::task::spawn_blocking(move || run_with_http(&cfg))
        .await
        .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_pipeline_pins_prod_version() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/prod/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"100": {"pkg::any-sync-node": "1.2.3"}}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (_dir, cfg) = scratch();
    fs::write(&cfg.input_file, "ANY_SYNC_NODE_VERSION=prod\n").unwrap();
    let cfg = cfg.with_role_url("prod", format!("{}/prod/", server.uri()));
    let output = cfg.output_file.clone();

    let report = run_blocking(cfg).await.unwrap();

    assert_eq!(report.variables, 1);
    assert_eq!(report.resolved.updated, 1);
    let written = fs::read_to_string(output).unwrap();
    assert!(written.contains("\nANY_SYNC_NODE_VERSION=v1.2.3\n"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_pipeline_override_selects_role() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stage1/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"100": {"pkg::any-sync-filenode": "0.1.0"},
                "200": {"pkg::any-sync-filenode": "0.2.0"}}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let (_dir, cfg) = scratch();
    fs::write(
        &cfg.input_file,
        "EXTERNAL_LISTEN_HOST=127.0.0.1\nANY_SYNC_FILENODE_VERSION=v0.0.9\n",
    )
    .unwrap();
    fs::write(&cfg.override_file, "ANY_SYNC_FILENODE_VERSION=stage1\n").unwrap();
    let cfg = cfg.with_role_url("stage1", format!("{}/stage1/", server.uri()));
    let output = cfg.output_file.clone();

    let report = run_blocking(cfg).await.unwrap();

    assert_eq!(report.overrides.replaced, 1);
    let written = fs::read_to_string(output).unwrap();
    assert!(written.ends_with(
        "EXTERNAL_LISTEN_HOST=127.0.0.1\nANY_SYNC_FILENODE_VERSION=v0.2.0\n"
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_pipeline_remote_failure_leaves_output_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let (_dir, cfg) = scratch();
    fs::write(&cfg.input_file, "ANY_SYNC_NODE_VERSION=prod\n").unwrap();
    fs::write(&cfg.output_file, "PREVIOUS=1\n").unwrap();
    let cfg = cfg.with_role_url("prod", format!("{}/prod/", server.uri()));
    let output = cfg.output_file.clone();

    let err = run_blocking(cfg).await.unwrap_err();

    assert!(matches!(err, EnvgenError::HttpStatus { status: 500, .. }));
    assert_eq!(fs::read_to_string(output).unwrap(), "PREVIOUS=1\n");
}

#[test]
fn test_pipeline_missing_defaults_writes_nothing() {
    let (_dir, cfg) = scratch();

    let err = run_with_http(&cfg).unwrap_err();

    assert!(matches!(err, EnvgenError::InputMissing { .. }));
    assert!(!cfg.output_file.exists());
}

#[test]
fn test_pipeline_without_roles_needs_no_network() {
    let (_dir, cfg) = scratch();
    fs::write(&cfg.input_file, "A=1\nANY_SYNC_NODE_VERSION=v0.3.0\n").unwrap();
    fs::write(&cfg.override_file, "A=2\nB=3\n").unwrap();

    let report = run_with_http(&cfg).unwrap();

    assert_eq!(report.variables, 3);
    assert_eq!(report.resolved.skipped, 1);
    let written = fs::read_to_string(&cfg.output_file).unwrap();
    assert!(written.ends_with("A=2\nANY_SYNC_NODE_VERSION=v0.3.0\nB=3\n"));
}
