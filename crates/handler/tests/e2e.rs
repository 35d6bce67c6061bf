//! End-to-end: handler + REST client + retry against a mock content API.

use draftlink_api::RetryPolicy;
use draftlink_handler::{HandlerConfig, InvocationEvent};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ARTICLE: &str = "45bd40bcbd874ee8176ed90155839d3a";
const LINK: &str = r#"<a href="https://www.google.com/" target="_blank">Google</a>"#;

fn draft() -> Value {
    json!({
        "id": ARTICLE,
        "content_elements": [
            { "_id": "b34d", "content": "Lorem Google ipsum dolor sit amet", "type": "text" },
            { "_id": "ff1b", "type": "reference" }
        ]
    })
}

fn processed() -> Value {
    json!({
        "id": ARTICLE,
        "content_elements": [
            { "_id": "b34d", "content": format!("Lorem {LINK} ipsum dolor sit amet"), "type": "text" },
            { "_id": "ff1b", "type": "reference" }
        ]
    })
}

fn config(server: &MockServer) -> HandlerConfig {
    let mut cfg = HandlerConfig::new(server.uri(), "test-token");
    cfg.retry = RetryPolicy::new(2, Duration::from_millis(5));
    cfg
}

fn event() -> InvocationEvent {
    InvocationEvent::with_body(&json!({ "articleId": ARTICLE }))
}

async fn mount_happy_path(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/article/{ARTICLE}/revision/draft")))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(draft()))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("PUT"))
        .and(path(format!("/v1/article/{ARTICLE}/revision/draft")))
        .and(body_json(json!({
            "document_id": ARTICLE,
            "draftRevision": processed(),
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("/v1/article/{ARTICLE}/revision/published")))
        .and(body_json(json!({ "type": "story", "id": ARTICLE })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn full_pipeline_succeeds() {
    let server = MockServer::start().await;
    mount_happy_path(&server).await;

    let handler = config(&server).build().unwrap();
    let resp = handler.handle(&event()).await;

    assert_eq!(resp.status_code, 200, "{}", resp.body);
    let body = resp.body_json().unwrap();
    assert_eq!(body["articleId"], ARTICLE);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn transient_publish_failure_recovers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    mount_happy_path(&server).await;

    let resp = config(&server).build().unwrap().handle(&event()).await;

    assert_eq!(resp.status_code, 200, "{}", resp.body);
}

#[tokio::test]
async fn fetch_exhaustion_returns_500_and_stops() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(3)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let resp = config(&server).build().unwrap().handle(&event()).await;

    assert_eq!(resp.status_code, 500);
    assert_eq!(
        resp.body_json().unwrap(),
        json!({
            "message": "Error processing article",
            "error": "Failed to get draft revision. Status code: 404"
        })
    );
}

#[tokio::test]
async fn missing_article_id_never_reaches_api() {
    let server = MockServer::start().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let resp = config(&server)
        .build()
        .unwrap()
        .handle(&InvocationEvent::with_body(&json!({ "other": 1 })))
        .await;

    assert_eq!(resp.status_code, 400);
}
