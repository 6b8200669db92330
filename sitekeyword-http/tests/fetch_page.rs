use sitekeyword_http::{FetchOpts, HttpClient, HttpError};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client() -> HttpClient {
    HttpClient::new("sitekeyword-tests")
        .expect("client")
        .with_timeout(Duration::from_secs(5))
}

#[tokio::test]
async fn returns_body_and_effective_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<title>Hello</title>", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let page = client()
        .fetch_page(&format!("{}/page", server.uri()), FetchOpts::default())
        .await
        .expect("fetch");

    assert_eq!(&page.body[..], b"<title>Hello</title>");
    assert_eq!(page.url.path(), "/page");
    assert!(page.status.is_success());
    assert_eq!(
        page.content_type.as_deref(),
        Some("text/html; charset=utf-8")
    );
}

#[tokio::test]
async fn follows_redirects_and_reports_final_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", format!("{}/new", server.uri())),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string("moved"))
        .mount(&server)
        .await;

    let page = client()
        .fetch_page(&format!("{}/old", server.uri()), FetchOpts::default())
        .await
        .expect("fetch");

    assert_eq!(page.url.path(), "/new");
    assert_eq!(&page.body[..], b"moved");
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("nope"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client()
        .fetch_page(&format!("{}/missing", server.uri()), FetchOpts::default())
        .await
        .unwrap_err();

    match err {
        HttpError::Status {
            status, message, ..
        } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(message, "nope");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_errors_are_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .with_priority(2)
        .mount(&server)
        .await;

    let page = client()
        .with_retries(1)
        .fetch_page(&format!("{}/flaky", server.uri()), FetchOpts::default())
        .await
        .expect("second attempt succeeds");

    assert_eq!(&page.body[..], b"ok");
}

#[tokio::test]
async fn zero_retries_surfaces_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let opts = FetchOpts {
        retries: Some(0),
        ..Default::default()
    };
    let err = client().fetch_page(&server.uri(), opts).await.unwrap_err();
    assert!(matches!(err, HttpError::Status { .. }));
}

#[tokio::test]
async fn rejects_invalid_and_non_http_urls() {
    let c = client();
    assert!(matches!(
        c.fetch_page("not a url", FetchOpts::default()).await,
        Err(HttpError::Url(_))
    ));
    assert!(matches!(
        c.fetch_page("ftp://example.com/file", FetchOpts::default()).await,
        Err(HttpError::Url(_))
    ));
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    let opts = FetchOpts {
        timeout: Some(Duration::from_secs(2)),
        retries: Some(0),
        ..Default::default()
    };
    // Port 9 (discard) on localhost is closed in test environments.
    let err = client()
        .fetch_page("http://127.0.0.1:9/", opts)
        .await
        .unwrap_err();
    assert!(err.is_network());
}
