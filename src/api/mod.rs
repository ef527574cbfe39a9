use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderValue, Method, header};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Router, extract::State, routing::get};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use crate::error::AppError;
use crate::models::GenerateCourseRequest;
use crate::services::CourseService;
use crate::state::AppState;

pub const COURSE_SOURCE_HEADER: &str = "x-course-source";

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    model: &'static str,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/generate-course", post(generate_course))
        .with_state(state)
}

pub fn cors_layer(allow_origin: &str) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if allow_origin == "*" {
        return Ok(layer.allow_origin(Any));
    }

    let origin = HeaderValue::from_str(allow_origin)
        .map_err(|_| AppError::Config(format!("invalid CORS origin: {}", allow_origin)))?;
    Ok(layer.allow_origin(origin))
}

async fn root() -> &'static str {
    "Course generator is running"
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model: state.model.name(),
    })
}

async fn generate_course(
    State(state): State<AppState>,
    payload: Result<Json<GenerateCourseRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let topic = req.topic()?;

    let service = CourseService::new(state.model.clone());
    let generated = service.generate(topic).await;

    Ok((
        [(COURSE_SOURCE_HEADER, generated.source.as_str())],
        Json(generated.course),
    ))
}
