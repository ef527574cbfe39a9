use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use course_forge::api::{COURSE_SOURCE_HEADER, router};
use course_forge::error::AppError;
use course_forge::gemini::{CourseModel, UnavailableModel};
use course_forge::models::{Course, ResourceKind};
use course_forge::state::AppState;
use http_body_util::BodyExt;
use tower::ServiceExt;

struct CannedModel(&'static str);

#[async_trait]
impl CourseModel for CannedModel {
    async fn generate(&self, _prompt: &str) -> Result<String, AppError> {
        Ok(self.0.to_string())
    }

    fn name(&self) -> &'static str {
        "canned"
    }
}

fn app(model: Arc<dyn CourseModel>) -> axum::Router {
    router(AppState { model })
}

fn post_course(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate-course")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

#[tokio::test]
async fn fallback_course_is_served_when_model_is_unavailable() {
    let response = app(Arc::new(UnavailableModel))
        .oneshot(post_course(r#"{"topic":"Rust"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[COURSE_SOURCE_HEADER], "fallback");

    let course: Course = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(course.title, "Master Rust");
    assert!(course.days.len() >= 5);
    for kind in [ResourceKind::Video, ResourceKind::Pdf, ResourceKind::Article] {
        assert!(course.resources.iter().any(|r| r.kind == kind), "missing {:?}", kind);
    }
}

#[tokio::test]
async fn response_uses_camel_case_contract() {
    let response = app(Arc::new(UnavailableModel))
        .oneshot(post_course(r#"{"topic":"Rust"}"#))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["totalLessons"], 15);
    assert_eq!(body["estimatedTime"], "2-3 hours/day");
    assert_eq!(body["days"][0]["day"], 1);
    assert_eq!(body["resources"][0]["type"], "video");
}

#[tokio::test]
async fn model_course_is_normalized_and_returned() {
    let reply = "Sure!\n```json\n{\"title\":\"Rust in a Week\",\"days\":[{\"title\":\"Ownership\",\"goals\":[\"borrow\"]}],\"resources\":[{\"title\":\"Book\",\"type\":\"ebook\"}]}\n```";
    let response = app(Arc::new(CannedModel(reply)))
        .oneshot(post_course(r#"{"topic":"Rust"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[COURSE_SOURCE_HEADER], "model");

    let course: Course = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(course.title, "Rust in a Week");
    assert_eq!(course.duration, "5 Days");
    assert_eq!(course.days.len(), 1);
    assert_eq!(course.days[0].day, 1);
    assert_eq!(course.days[0].goals, vec!["borrow"]);
    assert_eq!(course.resources[0].kind, ResourceKind::Article);
}

#[tokio::test]
async fn unparsable_model_reply_falls_back() {
    let response = app(Arc::new(CannedModel("I cannot help with that.")))
        .oneshot(post_course(r#"{"topic":"Chess"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[COURSE_SOURCE_HEADER], "fallback");

    let body = body_json(response).await;
    assert_eq!(body["title"], "Master Chess");
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn missing_topic_is_rejected() {
    let response = app(Arc::new(UnavailableModel))
        .oneshot(post_course("{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn non_string_topic_is_rejected() {
    for body in [r#"{"topic":42}"#, r#"{"topic":null}"#, r#"{"topic":"   "}"#] {
        let response = app(Arc::new(UnavailableModel))
            .oneshot(post_course(body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);
    }
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let response = app(Arc::new(UnavailableModel))
        .oneshot(post_course("{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn root_and_health_respond() {
    let response = app(Arc::new(UnavailableModel))
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app(Arc::new(UnavailableModel))
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["model"], "unavailable");
}
