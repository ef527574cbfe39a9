//! Prompting the model and pulling a JSON payload out of its reply.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::error::AppError;
use crate::gemini::CourseModel;

/// Fenced block tagged as JSON.
static TAGGED_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(?i:json)\s*([\s\S]*?)\s*```").expect("tagged fence regex should compile")
});

/// Fenced block with no language tag.
static PLAIN_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```\s*([\s\S]*?)\s*```").expect("plain fence regex should compile")
});

pub fn build_prompt(topic: &str) -> String {
    format!(
        r#"Create a 5-day mini-course to learn "{topic}".

Respond with a single JSON object and nothing else, using exactly this shape:
{{
  "title": "course title",
  "duration": "5 Days",
  "summary": "two or three sentences describing the course",
  "totalLessons": 15,
  "estimatedTime": "2-3 hours/day",
  "days": [
    {{
      "day": 1,
      "title": "title of the day",
      "goals": ["goal"],
      "concepts": ["concept"],
      "exercises": ["exercise"],
      "notes": "a short paragraph explaining the day's material"
    }}
  ],
  "resources": [
    {{
      "title": "resource title",
      "type": "video",
      "url": "https://...",
      "description": "what the learner gets from it"
    }}
  ]
}}

Requirements:
- Provide exactly 5 entries in "days", numbered 1 to 5, building from fundamentals to mastery.
- Give 3-4 items in every "goals", "concepts" and "exercises" list.
- Provide 3-4 resources with "type" set to one of "video", "article" or "pdf"; include at least one video, one article and one pdf.
- Resource URLs must be real, publicly reachable and relevant to {topic}.
- Do not wrap the JSON in prose."#
    )
}

/// Ask the model for a course. The raw reply is returned untouched.
pub async fn request_course(model: &dyn CourseModel, topic: &str) -> Result<String, AppError> {
    let prompt = build_prompt(topic);
    model.generate(&prompt).await
}

/// Returns the body of the first fenced code block, preferring a
/// `json`-tagged fence, or the trimmed input when there is none.
pub fn extract_json(text: &str) -> &str {
    TAGGED_FENCE
        .captures(text)
        .or_else(|| PLAIN_FENCE.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .unwrap_or_else(|| text.trim())
}

/// Request a course and parse the reply into an untyped JSON value.
pub async fn parse_model_response(model: &dyn CourseModel, topic: &str) -> Result<Value, AppError> {
    let raw = request_course(model, topic).await?;
    let payload = extract_json(&raw);
    serde_json::from_str(payload).map_err(|e| {
        debug!(raw = %raw, "model reply could not be parsed");
        AppError::Parse(e)
    })
}
