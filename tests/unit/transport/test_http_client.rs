use mockito::{Matcher, Server};
use pdd_client::config::{Config, Credentials, RestApiConfig};
use pdd_client::error::AppError;
use pdd_client::transport::{PddHttpClient, PddRestClient};
use std::sync::Arc;
use tokio_test::block_on;

// Helper function to create a test config pointing at the mock server
fn create_test_config(server_url: &str) -> Config {
    Config {
        credentials: Credentials {
            pdd_token: "test_pdd_token".to_string(),
        },
        rest_api: RestApiConfig {
            base_url: server_url.to_string(),
            timeout: 30,
        },
        page_size: 20,
    }
}

fn create_test_client(server_url: &str) -> PddRestClient {
    PddRestClient::new(Arc::new(create_test_config(server_url)))
        .expect("Failed to create HTTP client")
}

#[test]
fn test_get_without_post_params() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/api2/admin/domain/registration_status")
        .match_header("PddToken", "test_pdd_token")
        .match_query(Matcher::UrlEncoded("domain".into(), "example.com".into()))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"success":"ok","status":"added"}"#)
        .create();

    let client = create_test_client(&server.url());
    let body = block_on(client.get_data(
        "/api2/admin/domain/registration_status",
        &[("domain", "example.com".to_string())],
        &[],
    ))
    .expect("Request should succeed");

    assert_eq!(body["success"], "ok");
    assert_eq!(body["status"], "added");
    mock.assert();
}

#[test]
fn test_post_when_post_params_present() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/api2/admin/domain/register")
        .match_header("PddToken", "test_pdd_token")
        .match_body(Matcher::UrlEncoded("domain".into(), "example.com".into()))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"success":"ok","domain":{"name":"example.com"}}"#)
        .create();

    let client = create_test_client(&server.url());
    let body = block_on(client.get_data(
        "/api2/admin/domain/register",
        &[],
        &[("domain", "example.com".to_string())],
    ))
    .expect("Request should succeed");

    assert_eq!(body["success"], "ok");
    mock.assert();
}

#[test]
fn test_query_params_kept_on_post() {
    let mut server = Server::new();

    // Query string and form body travel together when both are given
    let mock = server
        .mock("POST", "/api2/admin/email/edit")
        .match_query(Matcher::UrlEncoded("dry_run".into(), "1".into()))
        .match_body(Matcher::UrlEncoded("domain".into(), "example.com".into()))
        .with_status(200)
        .with_body(r#"{"success":"ok"}"#)
        .create();

    let client = create_test_client(&server.url());
    let body = block_on(client.get_data(
        "/api2/admin/email/edit",
        &[("dry_run", "1".to_string())],
        &[("domain", "example.com".to_string())],
    ))
    .expect("Request should succeed");

    assert_eq!(body["success"], "ok");
    mock.assert();
}

#[test]
fn test_non_2xx_with_json_body_returns_body() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/api2/admin/domain/register")
        .with_status(500)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"success":"error","error":"unknown"}"#)
        .create();

    let client = create_test_client(&server.url());
    let body = block_on(client.get_data(
        "/api2/admin/domain/register",
        &[],
        &[("domain", "example.com".to_string())],
    ))
    .expect("JSON body should be returned despite the status");

    assert_eq!(body["success"], "error");
    assert_eq!(body["error"], "unknown");
    mock.assert();
}

#[test]
fn test_non_2xx_without_json_body_is_http_error() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/api2/admin/domain/domains")
        .with_status(502)
        .with_body("<html>bad gateway</html>")
        .create();

    let client = create_test_client(&server.url());
    let result = block_on(client.get_data("/api2/admin/domain/domains", &[], &[]));

    match result {
        Err(AppError::Http { status, body }) => {
            assert_eq!(status.as_u16(), 502);
            assert!(body.contains("bad gateway"));
        }
        other => panic!("Expected AppError::Http, got {other:?}"),
    }
    mock.assert();
}

#[test]
fn test_2xx_without_json_body_is_decode_error() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/api2/admin/domain/domains")
        .with_status(200)
        .with_body("not json at all")
        .create();

    let client = create_test_client(&server.url());
    let result = block_on(client.get_data("/api2/admin/domain/domains", &[], &[]));

    assert!(matches!(result, Err(AppError::Decode(_))));
    mock.assert();
}

#[test]
fn test_network_error_maps_to_network_variant() {
    // Nothing listens on this port
    let config = create_test_config("http://127.0.0.1:9");
    let client = PddRestClient::new(Arc::new(config)).expect("Failed to create HTTP client");

    let result = block_on(client.get_data("/api2/admin/domain/domains", &[], &[]));
    assert!(matches!(result, Err(AppError::Network(_))));
}
