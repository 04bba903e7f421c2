//! Status handling, authentication and close semantics.

use dependency_track::{DependencyTrackClient, DependencyTrackError};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> DependencyTrackClient {
    DependencyTrackClient::new(&server.uri(), "test-key").unwrap()
}

#[tokio::test]
async fn test_unauthorized_is_authentication_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/project"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).projects().list().await.unwrap_err();

    assert!(err.is_authentication());
    assert_eq!(err.status_code(), Some(401));
    assert_eq!(err.response().unwrap().body, "Unauthorized");
}

#[tokio::test]
async fn test_forbidden_is_authentication_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).components().list().await.unwrap_err();

    assert!(matches!(err, DependencyTrackError::Authentication { .. }));
}

#[tokio::test]
async fn test_only_200_counts_as_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/project"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).projects().list().await.unwrap_err();

    assert!(matches!(err, DependencyTrackError::Api { .. }));
    assert_eq!(err.status_code(), Some(204));
}

#[tokio::test]
async fn test_failed_response_keeps_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/license"))
        .respond_with(
            ResponseTemplate::new(500)
                .insert_header("X-Request-Id", "req-7")
                .set_body_json(json!({"message": "database unavailable"})),
        )
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).licenses().list().await.unwrap_err();
    let response = err.response().unwrap();

    assert_eq!(response.status.as_u16(), 500);
    assert_eq!(response.headers.get("x-request-id").unwrap(), "req-7");
    assert!(response.url.as_str().contains("/api/v1/license"));
    assert!(err.to_string().ends_with("database unavailable"));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/component"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).components().list().await.unwrap_err();

    assert!(matches!(err, DependencyTrackError::Parse(_)));
}

#[tokio::test]
async fn test_closed_client_fails_without_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let clone = client.clone();

    // Works before close
    client.projects().list().await.unwrap();

    client.close();

    let err = client.projects().list().await.unwrap_err();
    assert!(matches!(err, DependencyTrackError::Closed));

    let err = clone.search("anything").await.unwrap_err();
    assert!(matches!(err, DependencyTrackError::Closed));
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    // Grab a free port, then release it so nothing is listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = DependencyTrackClient::new(&format!("http://{addr}"), "test-key").unwrap();
    let err = client.projects().list().await.unwrap_err();

    assert!(matches!(err, DependencyTrackError::Http(_)));
    assert!(err.response().is_none());
}

#[tokio::test]
async fn test_truncated_error_body_still_reports_status() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    // A server that promises more body than it sends, then hangs up
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let _ = socket
            .write_all(
                b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\nConnection: close\r\n\r\npartial",
            )
            .await;
        let _ = socket.shutdown().await;
    });

    let client = DependencyTrackClient::new(&format!("http://{addr}"), "test-key").unwrap();
    let err = client.projects().list().await.unwrap_err();

    let response = err.response().expect("expected a failed response");
    assert_eq!(response.status.as_u16(), 500);
    assert!(response.body.is_empty());
    assert_eq!(response.message(), "Internal Server Error");
}
