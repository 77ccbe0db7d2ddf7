use canonical_cli::config::Config;
use canonical_cli::run_request;
use httpmock::prelude::*;
use std::fs;
use tempfile::TempDir;

fn config_for(server: &MockServer, request_name: &str) -> Config {
    let mut config = Config::default();
    config.api.api_url = server.base_url();
    config.api.token_url = server.url("/token");
    config.api.timeout_secs = 5;
    config.credentials.username = "csdadmin".to_string();
    config.credentials.password = "CSDAdmin".to_string();
    config.credentials.client_id = "client-1".to_string();
    config.request.request_name = request_name.to_string();
    config
}

fn mock_token(server: &MockServer) {
    server.mock(|when, then| {
        when.method(POST).path("/token");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"access_token":"abc","token_type":"bearer"}"#);
    });
}

#[test]
fn test_run_configured_get() {
    let server = MockServer::start();
    mock_token(&server);
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v3/canonical/ticket/123")
            .header("authorization", "bearer abc");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"errors":[],"item":{"id":"123"}}"#);
    });

    let mut config = config_for(&server, "GET");
    config.request.get_url_extension = "123".to_string();

    assert!(run_request(&config));
    api_mock.assert();
}

#[test]
fn test_run_configured_post_sends_post_data() {
    let server = MockServer::start();
    mock_token(&server);
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v3/canonical/ticket/search")
            .query_param("page", "1")
            .query_param("pageSize", "10")
            .json_body(serde_json::json!({ "filters": [{ "searchTerm": "printer" }] }));
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"pageReturned":1,"itemsPerPage":10,"errors":[],"items":[{"id":"1"}]}"#);
    });

    let mut config = config_for(&server, "post");
    config.request.post_data = r#"{ "filters": [ { "searchTerm": "printer" } ] }"#.to_string();

    assert!(run_request(&config));
    api_mock.assert();
}

#[test]
fn test_unknown_request_name_fails_without_calls() {
    let server = MockServer::start();
    let token_mock = server.mock(|when, then| {
        when.method(POST).path("/token");
        then.status(200)
            .body(r#"{"access_token":"abc","token_type":"bearer"}"#);
    });

    let config = config_for(&server, "put");
    assert!(!run_request(&config));
    token_mock.assert_hits(0);
}

#[test]
fn test_run_from_config_file() {
    let server = MockServer::start();
    mock_token(&server);
    let api_mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/v2/canonical/incident/42");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"errors":[]}"#);
    });

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        format!(
            r#"
[api]
api_url = "{}"
token_url = "{}"
name = "incident"
version = "v2"

[credentials]
username = "csdadmin"
password = "CSDAdmin"
client_id = "client-1"

[request]
request_name = "delete"
delete_url_extension = "42"
"#,
            server.base_url(),
            server.url("/token")
        ),
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(run_request(&config));
    api_mock.assert();
}
