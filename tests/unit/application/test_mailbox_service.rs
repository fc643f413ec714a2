use mockito::{Matcher, Server};
use pdd_client::application::services::MailboxServiceImpl;
use pdd_client::config::{Config, Credentials, RestApiConfig};
use pdd_client::model::requests::MailboxEditRequest;
use pdd_client::prelude::MailboxService;
use pdd_client::transport::PddRestClient;
use std::sync::Arc;
use tokio_test::block_on;

fn create_test_config(server_url: &str, page_size: u32) -> Config {
    Config {
        credentials: Credentials {
            pdd_token: "test_pdd_token".to_string(),
        },
        rest_api: RestApiConfig {
            base_url: server_url.to_string(),
            timeout: 30,
        },
        page_size,
    }
}

fn create_service(server_url: &str, page_size: u32) -> MailboxServiceImpl<PddRestClient> {
    let config = Arc::new(create_test_config(server_url, page_size));
    let client =
        Arc::new(PddRestClient::new(config.clone()).expect("Failed to create HTTP client"));
    MailboxServiceImpl::new(config, client)
}

#[test]
fn test_list_mailboxes_accumulates_pages_with_domain_query() {
    let mut server = Server::new();

    let first = server
        .mock("GET", "/api2/admin/email/list")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("domain".into(), "example.com".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("on_page".into(), "2".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"success":"ok","accounts":[{"login":"info"},{"login":"sales"}],"found":2,"total":3}"#,
        )
        .expect(1)
        .create();
    let second = server
        .mock("GET", "/api2/admin/email/list")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("domain".into(), "example.com".into()),
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("on_page".into(), "2".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"success":"ok","accounts":[{"login":"admin"}],"found":1,"total":3}"#)
        .expect(1)
        .create();

    let service = create_service(&server.url(), 2);
    let accounts =
        block_on(service.list_mailboxes("example.com")).expect("Listing should succeed");

    assert_eq!(accounts.len(), 3);
    assert_eq!(accounts[0]["login"], "info");
    assert_eq!(accounts[2]["login"], "admin");
    first.assert();
    second.assert();
}

#[test]
fn test_add_posts_credentials() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/api2/admin/email/add")
        .match_header("PddToken", "test_pdd_token")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("domain".into(), "example.com".into()),
            Matcher::UrlEncoded("login".into(), "info".into()),
            Matcher::UrlEncoded("password".into(), "s3cr3t-pass".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"success":"ok","login":"info"}"#)
        .create();

    let service = create_service(&server.url(), 20);
    let body = block_on(service.add("example.com", "info", "s3cr3t-pass"))
        .expect("Add should succeed");

    assert_eq!(body["success"], "ok");
    mock.assert();
}

#[test]
fn test_edit_with_autofill_fills_profile_defaults() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/api2/admin/email/edit")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("domain".into(), "d.com".into()),
            Matcher::UrlEncoded("login".into(), "bob".into()),
            Matcher::UrlEncoded("iname".into(), "Firstname".into()),
            Matcher::UrlEncoded("fname".into(), "Lastname".into()),
            Matcher::UrlEncoded("enabled".into(), "yes".into()),
            Matcher::UrlEncoded("birth_date".into(), "1980-08-08".into()),
            Matcher::UrlEncoded("sex".into(), "1".into()),
            // Generated fresh per call; only the prefix is stable
            Matcher::Regex("hinta=3_".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"success":"ok"}"#)
        .create();

    let service = create_service(&server.url(), 20);
    let body = block_on(service.edit("d.com", "bob", MailboxEditRequest::new(), true))
        .expect("Edit should succeed");

    assert_eq!(body["success"], "ok");
    mock.assert();
}

#[test]
fn test_edit_without_autofill_sends_only_set_fields() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/api2/admin/email/edit")
        .match_body(Matcher::Exact(
            "domain=d.com&login=bob&iname=John".to_string(),
        ))
        .with_status(200)
        .with_body(r#"{"success":"ok"}"#)
        .create();

    let service = create_service(&server.url(), 20);
    let request = MailboxEditRequest::new().with_first_name("John");
    let body = block_on(service.edit("d.com", "bob", request, false))
        .expect("Edit should succeed");

    assert_eq!(body["success"], "ok");
    mock.assert();
}

#[test]
fn test_delete_posts_domain_and_login() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/api2/admin/email/del")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("domain".into(), "example.com".into()),
            Matcher::UrlEncoded("login".into(), "info".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"success":"ok"}"#)
        .create();

    let service = create_service(&server.url(), 20);
    let body =
        block_on(service.delete("example.com", "info")).expect("Delete should succeed");

    assert_eq!(body["success"], "ok");
    mock.assert();
}
