//! Integration tests for `GuardianClient` using wiremock HTTP mocks.

use chrono::NaiveDate;
use gsent_core::RunRequest;
use gsent_guardian::{ArticleSource, FetchError, GuardianClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> GuardianClient {
    GuardianClient::with_base_url("test-key", 30, "gsent-test", base_url)
        .expect("client construction should not fail")
        .with_retry(2, 0)
}

fn climate_request() -> RunRequest {
    RunRequest::new("climate", NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(), 3)
        .expect("valid request")
}

fn result(slug: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": format!("environment/2023/jan/05/{slug}"),
        "type": "article",
        "sectionId": "environment",
        "sectionName": "Environment",
        "webPublicationDate": "2023-01-05T10:00:00Z",
        "webTitle": title,
        "webUrl": format!("https://www.theguardian.com/environment/2023/jan/05/{slug}"),
        "apiUrl": format!("https://content.guardianapis.com/environment/2023/jan/05/{slug}"),
        "isHosted": false,
        "pillarId": "pillar/news",
        "pillarName": "News"
    })
}

fn ok_body(page: u32, pages: u32, results: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({
        "response": {
            "status": "ok",
            "userTier": "developer",
            "total": 42,
            "startIndex": 1,
            "pageSize": 10,
            "currentPage": page,
            "pages": pages,
            "orderBy": "relevance",
            "results": results
        }
    })
}

#[tokio::test]
async fn fetch_page_sends_expected_query_and_parses_results() {
    let server = MockServer::start().await;

    let body = ok_body(
        1,
        5,
        vec![
            result("progress", "Great progress on climate"),
            result("disaster", "Disaster looms"),
        ],
    );

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "climate"))
        .and(query_param("api-key", "test-key"))
        .and(query_param("from-date", "2023-01-01"))
        .and(query_param("page-size", "10"))
        .and(query_param("page", "1"))
        .and(query_param("order-by", "relevance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client
        .fetch_page(&climate_request(), 1)
        .await
        .expect("should parse page");

    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, Some(5));
    assert_eq!(page.articles.len(), 2);
    assert_eq!(page.articles[0].title, "Great progress on climate");
    assert_eq!(page.articles[0].section, "Environment");
    assert_eq!(
        page.articles[1].web_url,
        "https://www.theguardian.com/environment/2023/jan/05/disaster"
    );
    assert_eq!(
        page.articles[1].api_url,
        "https://content.guardianapis.com/environment/2023/jan/05/disaster"
    );
}

#[tokio::test]
async fn empty_results_page_is_ok() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(1, 0, vec![])))
        .mount(&server)
        .await;

    let page = test_client(&server.uri())
        .search_page(&climate_request(), 1)
        .await
        .expect("empty page should parse");
    assert!(page.articles.is_empty());
    assert_eq!(page.total_pages, Some(0));
}

#[tokio::test]
async fn missing_results_is_parse_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "response": { "status": "ok", "pages": 1 } });
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .search_page(&climate_request(), 1)
        .await
        .unwrap_err();
    assert!(err.is_parse_error(), "expected parse error, got {err}");
    assert!(matches!(err, FetchError::MissingField { ref field, .. } if field == "response.results"));
}

#[tokio::test]
async fn entry_missing_field_is_parse_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "response": {
            "status": "ok",
            "pages": 1,
            "results": [ { "webTitle": "No links here", "sectionName": "World news" } ]
        }
    });
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .search_page(&climate_request(), 1)
        .await
        .unwrap_err();
    assert!(
        matches!(err, FetchError::Deserialize { ref context, .. } if context == "search page 1"),
        "expected Deserialize, got {err}"
    );
}

#[tokio::test]
async fn malformed_json_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .search_page(&climate_request(), 1)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Deserialize { .. }));
}

#[tokio::test]
async fn error_status_in_body_is_api_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "response": { "status": "error", "message": "something went wrong" }
    });
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .search_page(&climate_request(), 1)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::ApiError(ref m) if m == "something went wrong"));
}

#[tokio::test]
async fn unauthorized_is_not_retried_and_hides_key() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "response": { "status": "error", "message": "The api key provided is invalid" }
    });
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(401).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .search_page(&climate_request(), 1)
        .await
        .unwrap_err();

    match &err {
        FetchError::UnexpectedStatus {
            status,
            url,
            message,
        } => {
            assert_eq!(*status, 401);
            assert!(!url.contains("test-key"), "api key leaked into error: {url}");
            assert_eq!(message.as_deref(), Some("The api key provided is invalid"));
        }
        other => panic!("expected UnexpectedStatus, got {other}"),
    }
    assert!(!err.to_string().contains("test-key"));
}

#[tokio::test]
async fn server_error_is_retried_then_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_body(1, 1, vec![result("a", "Recovery after outage")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let page = test_client(&server.uri())
        .search_page(&climate_request(), 1)
        .await
        .expect("should succeed after one retry");
    assert_eq!(page.articles.len(), 1);
}

#[tokio::test]
async fn persistent_server_error_exhausts_retries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .search_page(&climate_request(), 1)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::UnexpectedStatus { status: 500, .. }));
    assert!(!err.is_parse_error());
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_body(1, 1, vec![]))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = GuardianClient::with_base_url("test-key", 1, "gsent-test", &server.uri())
        .expect("client construction should not fail")
        .with_retry(0, 0);

    let err = client
        .search_page(&climate_request(), 1)
        .await
        .unwrap_err();
    assert!(
        matches!(err, FetchError::Http(ref e) if e.is_timeout()),
        "expected timeout, got {err}"
    );
}
