//! Integration tests for the generated contacts client.
//!
//! These tests use wiremock to mock HTTP responses and verify that the
//! generated client builds requests and decodes responses correctly.

use restgen_sample::contacts::{Color, Contact, ContactsClient};
use restgen_sample::{ClientError, ResourceError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

/// Matches the raw query string exactly, order included.
struct ExactQuery(Option<&'static str>);

impl Match for ExactQuery {
    fn matches(&self, request: &Request) -> bool {
        request.url.query() == self.0
    }
}

fn contact() -> Contact {
    Contact {
        id: "42".to_string(),
        first_name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        color: Color::Green,
        ..Default::default()
    }
}

fn contact_json() -> serde_json::Value {
    json!({"id": "42", "firstName": "Ada", "email": "ada@example.com", "color": "GREEN"})
}

#[tokio::test]
async fn get_decodes_body_and_output_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts/42"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(contact_json())
                .insert_header("ETag", "\"v1\""),
        )
        .mount(&server)
        .await;

    let client = ContactsClient::new(server.uri());
    let (found, tag) = client.get_contact("42", "").await.unwrap();

    assert_eq!(found, Some(contact()));
    assert_eq!(tag, "\"v1\"");
}

#[tokio::test]
async fn not_modified_skips_decoding() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts/42"))
        .and(header("If-None-Match", "\"v1\""))
        .respond_with(ResponseTemplate::new(304).insert_header("ETag", "\"v1\""))
        .mount(&server)
        .await;

    let client = ContactsClient::new(server.uri());
    let (found, tag) = client.get_contact("42", "\"v1\"").await.unwrap();

    assert_eq!(found, None);
    assert_eq!(tag, "\"v1\"");
}

#[tokio::test]
async fn empty_optional_header_is_not_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contact_json()))
        .mount(&server)
        .await;

    let client = ContactsClient::new(server.uri());
    client.get_contact("42", "").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("if-none-match"));
}

#[tokio::test]
async fn unexpected_status_is_resource_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts/7"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"code": 404, "message": "no such contact"})),
        )
        .mount(&server)
        .await;

    let client = ContactsClient::new(server.uri());
    let err = client.get_contact("7", "").await.unwrap_err();

    assert_eq!(err.code(), Some(404));
    assert_eq!(
        err.resource_error(),
        Some(&ResourceError::new(404, "no such contact"))
    );
}

#[tokio::test]
async fn empty_error_body_falls_back_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = ContactsClient::new(server.uri());
    let err = client.delete_contact("7").await.unwrap_err();

    assert_eq!(err.resource_error(), Some(&ResourceError::new(404, "")));
}

#[tokio::test]
async fn non_json_error_body_becomes_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database on fire"))
        .mount(&server)
        .await;

    let client = ContactsClient::new(server.uri());
    let err = client.get_contact_at_rank(1).await.unwrap_err();

    assert_eq!(
        err.resource_error(),
        Some(&ResourceError::new(500, "database on fire"))
    );
}

#[tokio::test]
async fn partial_error_body_keeps_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"message": "stale"})))
        .mount(&server)
        .await;

    let client = ContactsClient::new(server.uri());
    let err = client.get_contact_at_rank(1).await.unwrap_err();

    assert_eq!(err.resource_error(), Some(&ResourceError::new(409, "stale")));
}

#[tokio::test]
async fn query_follows_declaration_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(ExactQuery(Some(
            "limit=5&skip=2&tag=a&tag=b&color=BLUE&q=x+y",
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([contact_json()])))
        .mount(&server)
        .await;

    let client = ContactsClient::new(server.uri());
    let tags = vec!["a".to_string(), "b".to_string()];
    let list = client
        .list_contacts(5, Some(2), &tags, Color::Blue, "x y")
        .await
        .unwrap();

    assert_eq!(list, vec![contact()]);
}

#[tokio::test]
async fn defaults_are_elided() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(ExactQuery(None))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = ContactsClient::new(server.uri());
    let list = client
        .list_contacts(10, None, &[], Color::Red, "")
        .await
        .unwrap();

    assert!(list.is_empty());
}

#[tokio::test]
async fn numeric_and_bool_query_values() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(ExactQuery(Some("ratio=0.1&weight=0.1&flag=true&level=3&page=-7")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = ContactsClient::new(server.uri());
    let list = client
        .search_contacts(0.1, Some(0.1), true, 3, Some(-7))
        .await
        .unwrap();

    assert!(list.is_empty());
}

#[tokio::test]
async fn numeric_and_bool_defaults_are_elided() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(ExactQuery(None))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = ContactsClient::new(server.uri());
    let list = client
        .search_contacts(0.5, None, false, -1, None)
        .await
        .unwrap();

    assert!(list.is_empty());
}

#[tokio::test]
async fn zero_is_sent_when_default_differs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(ExactQuery(Some("ratio=0&level=0")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = ContactsClient::new(server.uri());
    client
        .search_contacts(0.0, None, false, 0, None)
        .await
        .unwrap();
}

#[tokio::test]
async fn list_param_repeats_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(query_param("tag", "c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = ContactsClient::new(server.uri());
    let tags = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    client
        .list_contacts(10, None, &tags, Color::Red, "")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default();
    assert_eq!(query.matches("tag=").count(), 3);
}

#[tokio::test]
async fn put_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/contacts/42"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(contact_json()))
        .respond_with(ResponseTemplate::new(201).set_body_json(contact_json()))
        .mount(&server)
        .await;

    let client = ContactsClient::new(server.uri());
    let saved = client.put_contact("42", &contact()).await.unwrap();

    assert_eq!(saved, contact());
}

#[tokio::test]
async fn patch_sends_header_and_reads_revision() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/contacts/42"))
        .and(header("X-Request-Id", "req-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(contact_json())
                .insert_header("X-Revision", "7"),
        )
        .mount(&server)
        .await;

    let client = ContactsClient::new(server.uri());
    let (saved, revision) = client
        .patch_contact("42", "req-1", &contact())
        .await
        .unwrap();

    assert_eq!(saved, contact());
    assert_eq!(revision, 7);
}

#[tokio::test]
async fn missing_typed_output_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contact_json()))
        .mount(&server)
        .await;

    let client = ContactsClient::new(server.uri());
    let (_, revision) = client
        .patch_contact("42", "req-1", &contact())
        .await
        .unwrap();

    assert_eq!(revision, 0);
}

#[tokio::test]
async fn post_handles_created_and_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contacts"))
        .respond_with(ResponseTemplate::new(201).set_body_json(contact_json()))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/contacts"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = ContactsClient::new(server.uri());
    assert_eq!(client.post_contact(&contact()).await.unwrap(), Some(contact()));
    assert_eq!(client.post_contact(&contact()).await.unwrap(), None);
}

#[tokio::test]
async fn delete_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/contacts/42"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = ContactsClient::new(server.uri());
    client.delete_contact("42").await.unwrap();
}

#[tokio::test]
async fn non_string_path_param() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ranks/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contact_json()))
        .mount(&server)
        .await;

    let client = ContactsClient::new(server.uri());
    assert_eq!(client.get_contact_at_rank(3).await.unwrap(), contact());
}

#[tokio::test]
async fn cookie_credentials_become_cookie_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("Cookie", "session=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contact_json()))
        .mount(&server)
        .await;

    let mut client = ContactsClient::new(server.uri());
    client.add_credentials("Cookie.session", "abc");
    assert_eq!(client.get_contact_at_rank(1).await.unwrap(), contact());
}

#[tokio::test]
async fn plain_credentials_become_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("X-Api-Key", "k-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contact_json()))
        .mount(&server)
        .await;

    let mut client = ContactsClient::new(server.uri());
    client.add_credentials("X-Api-Key", "k-123");
    assert_eq!(client.get_contact_at_rank(1).await.unwrap(), contact());
}

#[tokio::test]
async fn mismatched_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = ContactsClient::new(server.uri());
    let err = client.get_contact_at_rank(1).await.unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)));
    assert_eq!(err.code(), None);
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = ContactsClient::new(uri);
    let err = client.get_contact_at_rank(1).await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn shared_transport_is_used() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("User-Agent", "contacts-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contact_json()))
        .mount(&server)
        .await;

    let transport = reqwest::Client::builder()
        .user_agent("contacts-test")
        .build()
        .unwrap();
    let client = ContactsClient::with_transport(server.uri(), transport);
    assert_eq!(client.get_contact_at_rank(1).await.unwrap(), contact());
}
