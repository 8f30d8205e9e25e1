use std::sync::Arc;

use wiremock::matchers::{body_bytes, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use spirius_sms_client::SmsError;
use spirius_sms_client::auth::{
    Credentials, FixedClock, SignableRequest, StaticCredentials, authorization_header,
    sign_request,
};
use spirius_sms_client::rest::{SmsClient, SmsRestClient};
use spirius_sms_client::types::{OrderedBody, SendSms};

const TIMESTAMP: i64 = 1_000_000_000;
const SEND_BODY: &[u8] = br#"{"message":"Hello world!","to":"+46123456789","from":"SPIRIUS"}"#;

fn build_client(base_url: String) -> SmsRestClient {
    let credentials = Arc::new(StaticCredentials::new("SomeUser", "testsecret").unwrap());
    SmsRestClient::builder(credentials)
        .base_url(base_url)
        .clock(Arc::new(FixedClock(TIMESTAMP)))
        .build()
        .unwrap()
}

fn expected_authorization(verb: &str, signed_path: &str, body: &[u8]) -> String {
    let credentials = Credentials::new("SomeUser", "testsecret").unwrap();
    let request = SignableRequest::new(verb, signed_path, TIMESTAMP, body);
    let signature = sign_request(&credentials, &request).unwrap();
    authorization_header(&credentials, &signature)
}

#[tokio::test]
async fn test_send_sms_signs_and_sends_same_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sms/mt/send"))
        .and(header("X-SMS-Timestamp", "1000000000"))
        .and(header(
            "Authorization",
            "SpiriusSmsV1 SomeUser:y+imWj4ld+fCQ1c6+MAFff4dWes3/HGJX8P7VHf2/xE=",
        ))
        .and(header("Content-Type", "application/json"))
        .and(body_bytes(SEND_BODY))
        .respond_with(ResponseTemplate::new(202).set_body_string(r#"{"transactionId":"abc123"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(server.uri());
    let response = client
        .send_sms(&SendSms::new("Hello world!", "+46123456789", "SPIRIUS"))
        .await
        .unwrap();

    assert_eq!(response.status, 202);
    assert!(response.is_success());
    let value: serde_json::Value = response.json().unwrap();
    assert_eq!(value["transactionId"], "abc123");
}

#[tokio::test]
async fn test_base_path_prefix_is_not_signed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/sms/mt/send"))
        .and(header(
            "Authorization",
            expected_authorization("POST", "/sms/mt/send", SEND_BODY).as_str(),
        ))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(format!("{}/v1", server.uri()));
    let response = client
        .send_sms(&SendSms::new("Hello world!", "+46123456789", "SPIRIUS"))
        .await
        .unwrap();
    assert_eq!(response.status, 202);
}

#[tokio::test]
async fn test_get_message_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sms/mo/status/abc123"))
        .and(header(
            "Authorization",
            "SpiriusSmsV1 SomeUser:/vTTB18x6L+QjId1HrVdMx/rUF6P2HEnXVSq50XwS20=",
        ))
        .and(header("X-SMS-Timestamp", "1000000000"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"delivered"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(server.uri());
    let response = client.get_message_status("abc123").await.unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body, r#"{"status":"delivered"}"#);

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn test_inbound_operations_use_their_own_verb_and_path() {
    let server = MockServer::start().await;

    let routes = [
        ("GET", "/sms/mo"),
        ("GET", "/sms/mo/42"),
        ("DELETE", "/sms/mo/43"),
        ("DELETE", "/sms/mo/next"),
    ];
    for (verb, route) in routes {
        Mock::given(method(verb))
            .and(path(route))
            .and(header("X-SMS-Timestamp", "1000000000"))
            .and(header("Content-Type", "application/json"))
            .and(header(
                "Authorization",
                expected_authorization(verb, route, b"").as_str(),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_string(route))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = build_client(server.uri());
    assert_eq!(client.get_mo_message_list().await.unwrap().body, "/sms/mo");
    assert_eq!(client.get_mo_message("42").await.unwrap().body, "/sms/mo/42");
    assert_eq!(client.pop_mo_message("43").await.unwrap().body, "/sms/mo/43");
    assert_eq!(client.pop_next_message().await.unwrap().body, "/sms/mo/next");
}

#[tokio::test]
async fn test_non_success_status_is_returned_not_raised() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sms/mt/send"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid signature"))
        .mount(&server)
        .await;

    let client = build_client(server.uri());
    let response = client
        .send_sms(&SendSms::new("Hello world!", "+46123456789", "SPIRIUS"))
        .await
        .unwrap();
    assert_eq!(response.status, 401);
    assert!(!response.is_success());
    assert_eq!(response.body, "Invalid signature");
}

#[tokio::test]
async fn test_generic_request_with_ordered_body() {
    let server = MockServer::start().await;
    let body = OrderedBody::new()
        .field("to", "+46123456789")
        .unwrap()
        .field("message", "Hi")
        .unwrap()
        .field("from", "SPIRIUS")
        .unwrap()
        .to_request_body()
        .unwrap();

    Mock::given(method("POST"))
        .and(path("/sms/mt/send"))
        .and(body_bytes(br#"{"to":"+46123456789","message":"Hi","from":"SPIRIUS"}"#.to_vec()))
        .and(header(
            "Authorization",
            expected_authorization("POST", "/sms/mt/send", body.as_bytes()).as_str(),
        ))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(server.uri());
    let response = client
        .request(reqwest::Method::POST, "/sms/mt/send", Some(&body))
        .await
        .unwrap();
    assert_eq!(response.status, 202);
}

#[tokio::test]
async fn test_generic_sms_client() {
    async fn status_of<C: SmsClient>(client: &C, id: &str) -> u16 {
        client.get_message_status(id).await.unwrap().status
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sms/mo/status/xyz"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = build_client(server.uri());
    assert_eq!(status_of(&client, "xyz").await, 404);
}

fn authorization_matches_sent_path(request: &Request) -> bool {
    let sent = request
        .headers
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let expected = expected_authorization(request.method.as_str(), request.url.path(), &request.body);
    sent == expected
}

#[tokio::test]
async fn test_message_ids_are_encoded_and_signed_as_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = build_client(server.uri());
    for id in ["a b", "x?y=1", "../mt/send", "é"] {
        let response = client.get_mo_message(id).await.unwrap();
        assert_eq!(response.status, 200);
    }

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 4);
    for request in &received {
        let sent_path = request.url.path();
        assert!(sent_path.starts_with("/sms/mo/"), "sent to {sent_path}");
        assert_eq!(sent_path.matches('/').count(), 3, "id split into segments: {sent_path}");
        assert!(request.url.query().is_none(), "id leaked into query: {}", request.url);
        assert!(authorization_matches_sent_path(request), "signature over wrong path: {sent_path}");
    }
    assert_eq!(received[0].url.path(), "/sms/mo/a%20b");
    assert_eq!(received[2].url.path(), "/sms/mo/..%2Fmt%2Fsend");
}

#[tokio::test]
async fn test_dot_segment_id_fails_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = build_client(server.uri());
    for id in ["..", ".", ""] {
        let err = client.pop_mo_message(id).await.unwrap_err();
        assert!(matches!(err, SmsError::InvalidPath(_)), "id {id:?}: {err:?}");
    }
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    let server = MockServer::builder().start().await;
    let uri = server.uri();
    drop(server);

    let client = build_client(uri);
    let err = client.get_mo_message_list().await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {err:?}");
}
