use serde::Deserialize;

use crate::error::AppError;

/// Body of `POST /generate-course`.
///
/// `topic` is kept as a raw JSON value so a non-string topic is reported
/// as a bad request instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct GenerateCourseRequest {
    #[serde(default)]
    pub topic: Option<serde_json::Value>,
}

impl GenerateCourseRequest {
    pub fn topic(&self) -> Result<&str, AppError> {
        match &self.topic {
            Some(serde_json::Value::String(topic)) if !topic.trim().is_empty() => Ok(topic.trim()),
            Some(serde_json::Value::String(_)) => {
                Err(AppError::BadRequest("Topic must not be empty".to_string()))
            }
            Some(serde_json::Value::Null) | None => {
                Err(AppError::BadRequest("Topic is required".to_string()))
            }
            Some(_) => Err(AppError::BadRequest("Topic must be a string".to_string())),
        }
    }
}
