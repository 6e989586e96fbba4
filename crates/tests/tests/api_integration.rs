use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use beacon_api::{build_app, ApiConfig};
use beacon_core::{core_contacts, GuidanceCategory};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    build_app(&ApiConfig::default())
}

fn chat_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/ai-chat")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn ask(app: Router, payload: Value) -> String {
    let response = app
        .oneshot(chat_request(payload.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let parsed = read_json(response).await;
    assert!(parsed.get("error").is_none());
    parsed
        .get("response")
        .and_then(Value::as_str)
        .expect("response field should be a string")
        .to_string()
}

#[tokio::test]
async fn health_reports_metrics() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let parsed = read_json(response).await;
    assert_eq!(parsed["status"], "ok");
    assert!(parsed["metrics"].get("requests_total").is_some());
}

#[tokio::test]
async fn chat_returns_fire_guidance() {
    let text = ask(app(), json!({ "message": "I smell smoke" })).await;
    assert_eq!(text, GuidanceCategory::Fire.template());
    assert!(text.contains("101"));
}

#[tokio::test]
async fn chat_resolves_overlap_by_declaration_order() {
    let text = ask(app(), json!({ "message": "there is a fire and I need help" })).await;
    assert_eq!(text, GuidanceCategory::Fire.template());
}

#[tokio::test]
async fn unmatched_message_gets_fallback_guidance() {
    for message in ["random unrelated text about lunch", "", "   "] {
        let text = ask(app(), json!({ "message": message })).await;
        assert_eq!(text, GuidanceCategory::Fallback.template());
        for contact in core_contacts() {
            assert!(text.contains(contact.number));
        }
    }
}

#[tokio::test]
async fn history_does_not_change_the_reply() {
    let with_history = ask(
        app(),
        json!({
            "message": "what should I do now?",
            "conversationHistory": [
                { "role": "user", "content": "earthquake!" },
                { "role": "assistant", "content": GuidanceCategory::Earthquake.template() }
            ]
        }),
    )
    .await;
    let without_history = ask(app(), json!({ "message": "what should I do now?" })).await;
    assert_eq!(with_history, without_history);
}

#[tokio::test]
async fn bad_history_still_gets_guidance() {
    for history in [
        json!([{ "role": "system", "content": "x" }]),
        json!([{ "role": "user" }]),
        json!([{ "role": "bot", "content": "hello" }]),
        json!({}),
        json!("earlier chat"),
    ] {
        let text = ask(
            app(),
            json!({ "message": "I smell smoke", "conversationHistory": history }),
        )
        .await;
        assert_eq!(text, GuidanceCategory::Fire.template());
    }
}

#[tokio::test]
async fn rejected_requests_are_reported_in_health() {
    let app = app();
    let response = app
        .clone()
        .oneshot(chat_request("{not json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let metrics = read_json(response).await["metrics"].clone();
    assert_eq!(metrics["requests_total"], 1);
    assert_eq!(metrics["transport_errors_total"], 1);
}

#[tokio::test]
async fn request_id_is_echoed_back() {
    let response = app()
        .oneshot(chat_request(json!({ "message": "earthquake" }).to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let request_id = response
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .expect("x-request-id should be set");
    assert!(!request_id.is_empty());

    let request = Request::builder()
        .method("POST")
        .uri("/ai-chat")
        .header("x-request-id", "portal-42")
        .body(Body::from(json!({ "message": "earthquake" }).to_string()))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|value| value.to_str().ok()),
        Some("portal-42")
    );
}

#[tokio::test]
async fn malformed_body_is_a_transport_error() {
    for body in [
        "{not json".to_string(),
        json!({ "conversationHistory": [] }).to_string(),
        json!({ "message": 7 }).to_string(),
        String::new(),
    ] {
        let response = app().oneshot(chat_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let parsed = read_json(response).await;
        assert!(parsed.get("error").and_then(Value::as_str).is_some());
        assert!(parsed.get("response").is_none());
    }
}

#[tokio::test]
async fn oversized_body_is_a_transport_error() {
    let config = ApiConfig {
        max_body_bytes: 128,
        ..ApiConfig::default()
    };
    let payload = json!({ "message": "fire ".repeat(100) }).to_string();

    let response = build_app(&config)
        .oneshot(chat_request(payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(read_json(response).await.get("error").is_some());
}

#[tokio::test]
async fn chat_accepts_missing_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/ai-chat")
        .body(Body::from(json!({ "message": "flood water rising" }).to_string()))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let parsed = read_json(response).await;
    assert_eq!(parsed["response"], GuidanceCategory::Flood.template());
}

#[tokio::test]
async fn non_post_is_rejected() {
    let response = app()
        .oneshot(Request::builder().uri("/ai-chat").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn preflight_is_answered_with_permissive_cors() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/ai-chat")
        .header("origin", "https://portal.example.org")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type, apikey")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn cross_origin_post_carries_cors_header() {
    let request = Request::builder()
        .method("POST")
        .uri("/ai-chat")
        .header("origin", "https://portal.example.org")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "message": "kit list" }).to_string()))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn contacts_lists_directory() {
    let response = app()
        .oneshot(Request::builder().uri("/contacts").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let parsed = read_json(response).await;
    let numbers = parsed["contacts"]
        .as_array()
        .expect("contacts should be an array")
        .iter()
        .filter_map(|contact| contact["number"].as_str())
        .collect::<Vec<_>>();
    assert_eq!(numbers, vec!["112", "101", "100", "108", "1077"]);
}
