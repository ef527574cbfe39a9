use std::sync::Arc;

use serde_json::Value;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::error::AppError;
use crate::gemini::CourseModel;
use crate::models::Course;
use crate::services::normalizer::{self, CourseDraft};
use crate::services::{fallback, requester};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseSource {
    Model,
    Fallback,
}

impl CourseSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseSource::Model => "model",
            CourseSource::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedCourse {
    pub course: Course,
    pub source: CourseSource,
}

pub struct CourseService {
    model: Arc<dyn CourseModel>,
}

impl CourseService {
    pub fn new(model: Arc<dyn CourseModel>) -> Self {
        Self { model }
    }

    /// Always yields a valid course; model and parse failures turn into the template.
    pub async fn generate(&self, topic: &str) -> GeneratedCourse {
        let span = info_span!("generate_course", request_id = %Uuid::new_v4(), topic = %topic);
        async move {
            info!(model = self.model.name(), "requesting course");
            let attempt = requester::parse_model_response(self.model.as_ref(), topic).await;
            let generated = resolve(attempt, topic);
            info!(
                source = generated.source.as_str(),
                days = generated.course.days.len(),
                resources = generated.course.resources.len(),
                "course ready"
            );
            generated
        }
        .instrument(span)
        .await
    }
}

/// Turn the outcome of a model attempt into a course.
pub fn resolve(attempt: Result<Value, AppError>, topic: &str) -> GeneratedCourse {
    match attempt {
        Ok(candidate) => GeneratedCourse {
            course: normalizer::normalize(Some(&candidate), topic),
            source: CourseSource::Model,
        },
        Err(err) => {
            let stage = match &err {
                AppError::Parse(_) => "parse",
                _ => "model",
            };
            warn!(stage, error = %err, "course generation failed, serving fallback");
            GeneratedCourse {
                course: CourseDraft::from(fallback::course(topic)).merge_with_defaults(topic),
                source: CourseSource::Fallback,
            }
        }
    }
}
