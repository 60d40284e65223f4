// ABOUTME: Integration tests for the docsnav CLI binary.
// ABOUTME: Tests menu resolution from files, local mode, HTML rendering, tab state, and GitHub stats.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const CHANNELS_JS: &str = r#"window.releasesInfo = {
  "menuChannels": [
    {"group": "1.1", "channels": [
      {"name": "alpha", "version": "v1.1.8"},
      {"name": "stable", "version": "v1.1.4"}
    ]},
    {"group": "1.2", "channels": [
      {"name": "alpha", "version": "v1.2.0"}
    ]}
  ],
  "orderedChannels": ["alpha", "beta", "stable", "rock-solid"]
};"#;

fn docsnav_cmd() -> Command {
    Command::cargo_bin("docsnav").unwrap()
}

fn write_catalog(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("channels.js");
    fs::write(&path, CHANNELS_JS).unwrap();
    path
}

#[test]
fn menu_resolves_root_channel() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir);

    let output = docsnav_cmd()
        .arg("menu")
        .arg("--catalog")
        .arg(&catalog)
        .arg("--release")
        .arg("v1.2.0")
        .arg("--channel")
        .arg("root")
        .arg("--location")
        .arg("https://werf.io/documentation/reference/cli.html")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["mode"], "release");
    assert_eq!(value["current_channel"], "1.2-alpha");
    assert_eq!(value["has_alternates"], true);
    assert_eq!(value["entries"][0]["label"], "1.1-alpha");
    assert_eq!(
        value["entries"][0]["url"],
        "/v1.1-alpha/documentation/reference/cli.html"
    );
    assert_eq!(value["entries"].as_array().unwrap().len(), 2);
}

#[test]
fn menu_reads_page_markers() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir);
    let page = dir.path().join("index.html");
    fs::write(
        &page,
        r#"<html><body><div id="werfVersion">v1.1.4</div><div id="werfChannel">root</div></body></html>"#,
    )
    .unwrap();

    docsnav_cmd()
        .arg("--compact")
        .arg("menu")
        .arg("--catalog")
        .arg(&catalog)
        .arg("--html")
        .arg(&page)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""current_channel":"1.1-stable""#));
}

#[test]
fn menu_lists_newest_group_first_on_request() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir);

    let output = docsnav_cmd()
        .arg("menu")
        .arg("--catalog")
        .arg(&catalog)
        .arg("--release")
        .arg("v1.1.4")
        .arg("--channel")
        .arg("root")
        .arg("--group-order")
        .arg("numeric-descending")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["current_channel"], "1.1-stable");
    assert_eq!(value["entries"][0]["label"], "1.2-alpha");
    assert_eq!(value["entries"][1]["label"], "1.1-alpha");
}

#[test]
fn menu_without_catalog_is_local_mode() {
    docsnav_cmd()
        .arg("--compact")
        .arg("menu")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""mode":"local""#));
}

#[test]
fn menu_renders_header_markup() {
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir);

    docsnav_cmd()
        .arg("menu")
        .arg("--catalog")
        .arg(&catalog)
        .arg("--release")
        .arg("v1.1.8")
        .arg("--channel")
        .arg("root")
        .arg("--render")
        .assert()
        .success()
        .stdout(predicate::str::contains("header__submenu-item"))
        .stdout(predicate::str::contains(r#"<a href="/documentation/">1.1-alpha"#));
}

#[test]
fn missing_catalog_file_fails() {
    docsnav_cmd()
        .arg("menu")
        .arg("--catalog")
        .arg("/definitely/not/here.js")
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn tabs_record_then_restore() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("tabs.json");

    docsnav_cmd()
        .arg("tabs")
        .arg("record")
        .arg("--store")
        .arg(&store)
        .arg("--container")
        .arg("os")
        .arg("--href")
        .arg("#macos")
        .assert()
        .success();

    docsnav_cmd()
        .arg("--compact")
        .arg("tabs")
        .arg("restore")
        .arg("--store")
        .arg(&store)
        .arg("--container")
        .arg("os=#linux,#macos")
        .arg("--container")
        .arg("shell=#bash,#pwsh")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r##"{"container_id":"os","href":"#macos","restored":true}"##,
        ))
        .stdout(predicate::str::contains(
            r##"{"container_id":"shell","href":"#bash","restored":false}"##,
        ));
}

#[test]
fn stars_queries_api() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/repos/werf/werf");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"stargazers_count":321}"#);
    });

    docsnav_cmd()
        .env_remove("GITHUB_TOKEN")
        .arg("--compact")
        .arg("stars")
        .arg("--repo")
        .arg("werf/werf")
        .arg("--api-base")
        .arg(server.base_url())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""stargazers_count":321"#));

    mock.assert();
}
