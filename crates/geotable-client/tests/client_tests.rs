// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, anyhow};
use geotable_app::{FETCH_FAILED_MESSAGE, RecordId, SortKey, ViewCommand, ViewController};
use geotable_client::Client;
use std::thread;
use std::time::Duration;
use tiny_http::{Header, Response, Server};

fn json_header() -> Header {
    Header::from_bytes("Content-Type", "application/json").expect("valid content type header")
}

fn serve_once(status: u16, body: &'static str) -> Result<(String, thread::JoinHandle<()>)> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!(
        "http://{}/geoentity-services/api/geoentity-sources/",
        server.server_addr()
    );

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        assert_eq!(request.method(), &tiny_http::Method::Get);
        assert_eq!(request.url(), "/geoentity-services/api/geoentity-sources/");
        let response = Response::from_string(body)
            .with_status_code(status)
            .with_header(json_header());
        request.respond(response).expect("response should succeed");
    });
    Ok((addr, handle))
}

#[test]
fn unreachable_endpoint_error_is_actionable() {
    let client = Client::new("http://127.0.0.1:1/api/", Duration::from_millis(50))
        .expect("client should initialize");

    let error = client
        .fetch_records()
        .expect_err("fetch should fail for unreachable endpoint");
    let message = error.to_string();
    assert!(
        message.contains("cannot reach") || message.contains("timed out"),
        "unexpected message: {message}"
    );
}

#[test]
fn fetch_records_decodes_data_envelope() -> Result<()> {
    let (addr, handle) = serve_once(200, geotable_testkit::fixture_envelope_json())?;

    let client = Client::new(&addr, Duration::from_secs(2))?;
    let records = client.fetch_records()?;
    assert_eq!(records.len(), 5);
    assert_eq!(records[0].name.as_deref(), Some("Narmada River Basin"));
    assert_eq!(records[2].id, Some(RecordId::from("41")));
    assert_eq!(records[3].parent_id, None);

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn server_error_status_is_reported() -> Result<()> {
    let (addr, handle) = serve_once(500, r#"{"message":"database offline"}"#)?;

    let client = Client::new(&addr, Duration::from_secs(2))?;
    let error = client
        .fetch_records()
        .expect_err("500 response should fail");
    assert_eq!(error.to_string(), "server error (500): database offline");

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn malformed_body_is_a_decode_error() -> Result<()> {
    let (addr, handle) = serve_once(200, r#"{"records":[]}"#)?;

    let client = Client::new(&addr, Duration::from_secs(2))?;
    let error = client
        .fetch_records()
        .expect_err("missing data array should fail");
    assert!(error.to_string().contains("decode records response"));

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn controller_loads_and_sorts_through_http_client() -> Result<()> {
    let (addr, handle) = serve_once(200, geotable_testkit::fixture_envelope_json())?;

    let mut client = Client::new(&addr, Duration::from_secs(2))?;
    let mut controller = ViewController::new();
    controller.load(&mut client)?;
    handle.join().expect("server thread should join");

    assert_eq!(controller.state().all_records().len(), 5);
    controller.dispatch(ViewCommand::SetCategory(Some("Hydrology".to_owned())));
    controller.dispatch(ViewCommand::SortBy(SortKey::Id));
    let ids = controller
        .state()
        .visible_records()
        .iter()
        .map(|record| record.display_field(SortKey::Id))
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["3", "12"]);
    Ok(())
}

#[test]
fn controller_reports_fixed_message_when_http_fails() -> Result<()> {
    let (addr, handle) = serve_once(404, "not found")?;

    let mut client = Client::new(&addr, Duration::from_secs(2))?;
    let mut controller = ViewController::new();
    controller.load(&mut client)?;
    handle.join().expect("server thread should join");

    let state = controller.state();
    assert_eq!(state.last_error(), Some(FETCH_FAILED_MESSAGE));
    assert!(state.visible_records().is_empty());
    assert!(!state.is_loading());
    Ok(())
}
