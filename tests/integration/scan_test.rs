// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;

use fuzzrs::config::settings::SettingsOverrides;
use fuzzrs::engines::reqwest_engine::ReqwestTransport;
use fuzzrs::workers::{RunCoordinator, RunState};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::helpers::{render, settings_for};

const NOT_FOUND: &str = "not found";

async fn api_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin"))
        .respond_with(ResponseTemplate::new(200).set_body_string("admin panel, api_key=123"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("denied"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("late")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    // everything else looks like the default "not found" page
    Mock::given(any())
        .respond_with(ResponseTemplate::new(404).set_body_string(NOT_FOUND))
        .mount(&server)
        .await;

    server
}

fn coordinator() -> RunCoordinator {
    RunCoordinator::new(Arc::new(ReqwestTransport::new().expect("client builds")))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_scan_flags_length_and_match() {
    let server = api_server().await;
    let settings = settings_for(
        vec![server.uri()],
        SettingsOverrides {
            methods: Some("get,post".into()),
            baseline_length: Some(NOT_FOUND.len() as u64),
            match_strings: Some(vec!["api_key".into()]),
            workers: Some(2),
            ..Default::default()
        },
    );

    let mut coordinator = coordinator();
    let report = coordinator
        .run(&settings, ["# endpoints", "admin", "", "login", "nothing"])
        .await
        .unwrap();

    assert_eq!(coordinator.state(), RunState::Done);
    let base = server.uri();
    assert_eq!(
        render(&report),
        vec![
            format!("[+] GET - \"api_key\" detected: {base}/admin"),
            format!("[+] GET - Different response length: 24 - {base}/admin"),
            format!("[+] POST - Different response length: 6 - {base}/login"),
        ]
    );
    assert_eq!(server.received_requests().await.unwrap().len(), 6);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_scan_timeout_does_not_stop_the_run() {
    let server = api_server().await;
    let settings = settings_for(
        vec![server.uri()],
        SettingsOverrides {
            methods: Some("get".into()),
            baseline_length: Some(NOT_FOUND.len() as u64),
            workers: Some(1),
            ..Default::default()
        },
    );

    let report = coordinator()
        .run(&settings, ["slow", "admin"])
        .await
        .unwrap();

    let base = server.uri();
    assert_eq!(
        render(&report),
        vec![
            format!("[Verbose] GET - Connection timed out - {base}/slow"),
            format!("[+] GET - Different response length: 24 - {base}/admin"),
        ]
    );
    assert_eq!(report.timeouts(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_verbose_traces_every_response() {
    let server = api_server().await;
    let settings = settings_for(
        vec![server.uri()],
        SettingsOverrides {
            methods: Some("get".into()),
            baseline_length: Some(NOT_FOUND.len() as u64),
            verbose: Some(true),
            workers: Some(3),
            ..Default::default()
        },
    );

    let report = coordinator()
        .run(&settings, ["a", "b", "c"])
        .await
        .unwrap();

    let base = server.uri();
    assert_eq!(
        render(&report),
        vec![
            format!("[VERBOSE] GET 9       {base}/a"),
            format!("[VERBOSE] GET 9       {base}/b"),
            format!("[VERBOSE] GET 9       {base}/c"),
        ]
    );
}

#[tokio::test]
async fn test_invalid_configuration_sends_nothing() {
    let server = api_server().await;
    let settings = settings_for(
        vec![server.uri()],
        SettingsOverrides {
            methods: Some("get,options".into()),
            ..Default::default()
        },
    );

    let mut coordinator = coordinator();
    let result = coordinator.run(&settings, ["admin"]).await;

    assert!(result.is_err());
    assert_eq!(coordinator.state(), RunState::Failed);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_unreachable_target_aborts_only_its_workers() {
    let server = api_server().await;
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let settings = settings_for(
        vec![dead.clone(), server.uri()],
        SettingsOverrides {
            methods: Some("get".into()),
            baseline_length: Some(NOT_FOUND.len() as u64),
            workers: Some(1),
            ..Default::default()
        },
    );

    let report = coordinator()
        .run(&settings, ["admin"])
        .await
        .unwrap();

    assert_eq!(report.aborted.len(), 1);
    assert_eq!(report.aborted[0].base_url, dead);
    let lines = render(&report);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("[!] GET - Request failed, worker 0 aborted:"));
    assert!(lines[0].ends_with(&format!("{dead}/admin")));
    assert_eq!(
        lines[1],
        format!(
            "[+] GET - Different response length: 24 - {}/admin",
            server.uri()
        )
    );
}
