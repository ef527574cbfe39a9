//! Coerces untrusted model output into a schema-valid [`Course`].
//!
//! Candidate data is first read into a draft whose fields are all optional.
//! Every lookup tolerates a missing key or a foreign JSON type, so reading
//! never fails. The draft is then merged with defaults to produce the final
//! course.

use serde_json::Value;
use tracing::{debug, warn};

use crate::models::{Course, DaySpec, ResourceKind, ResourceSpec};
use crate::services::fallback;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseDraft {
    pub title: Option<String>,
    pub duration: Option<String>,
    pub summary: Option<String>,
    pub total_lessons: Option<u32>,
    pub estimated_time: Option<String>,
    pub days: Vec<DayDraft>,
    pub resources: Vec<ResourceDraft>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayDraft {
    pub day: Option<u32>,
    pub title: Option<String>,
    pub goals: Vec<String>,
    pub concepts: Vec<String>,
    pub exercises: Vec<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceDraft {
    pub title: Option<String>,
    pub kind: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

/// Normalize an arbitrary candidate value. Never fails.
pub fn normalize(candidate: Option<&Value>, topic: &str) -> Course {
    let draft = candidate.map(CourseDraft::from_value).unwrap_or_default();
    draft.merge_with_defaults(topic)
}

impl CourseDraft {
    pub fn from_value(value: &Value) -> Self {
        let total_lessons = match value.get("totalLessons") {
            None | Some(Value::Null) => None,
            Some(raw) => {
                let count = coerce_count(raw);
                if count.is_none() {
                    warn!(value = %raw, "totalLessons is not a valid count, using default");
                }
                count
            }
        };

        Self {
            title: text_field(value, "title"),
            duration: text_field(value, "duration"),
            summary: text_field(value, "summary"),
            total_lessons,
            estimated_time: text_field(value, "estimatedTime"),
            days: value
                .get("days")
                .and_then(Value::as_array)
                .map(|days| days.iter().map(DayDraft::from_value).collect())
                .unwrap_or_default(),
            resources: value
                .get("resources")
                .and_then(Value::as_array)
                .map(|items| items.iter().map(ResourceDraft::from_value).collect())
                .unwrap_or_default(),
        }
    }

    pub fn merge_with_defaults(self, topic: &str) -> Course {
        let days = if self.days.is_empty() {
            debug!("no usable days in candidate, using template days");
            fallback::days(topic)
        } else {
            self.days
                .into_iter()
                .enumerate()
                .map(|(i, day)| day.merge_with_defaults(position(i)))
                .collect()
        };

        let resources = if self.resources.is_empty() {
            debug!("no usable resources in candidate, using template resources");
            fallback::resources(topic)
        } else {
            self.resources
                .into_iter()
                .map(ResourceDraft::merge_with_defaults)
                .collect()
        };

        Course {
            title: self.title.unwrap_or_else(|| fallback::course_title(topic)),
            duration: self
                .duration
                .unwrap_or_else(|| fallback::FALLBACK_DURATION.to_string()),
            summary: self.summary.unwrap_or_else(|| fallback::course_summary(topic)),
            total_lessons: self.total_lessons.unwrap_or(fallback::FALLBACK_TOTAL_LESSONS),
            estimated_time: self
                .estimated_time
                .unwrap_or_else(|| fallback::FALLBACK_ESTIMATED_TIME.to_string()),
            days,
            resources,
        }
    }
}

impl DayDraft {
    pub fn from_value(value: &Value) -> Self {
        Self {
            day: value.get("day").and_then(coerce_count),
            title: text_field(value, "title"),
            goals: list_field(value, "goals"),
            concepts: list_field(value, "concepts"),
            exercises: list_field(value, "exercises"),
            notes: text_field(value, "notes"),
        }
    }

    fn merge_with_defaults(self, position: u32) -> DaySpec {
        DaySpec {
            day: self.day.unwrap_or(position),
            title: self.title.unwrap_or_else(|| format!("Day {}", position)),
            goals: self.goals,
            concepts: self.concepts,
            exercises: self.exercises,
            notes: self.notes.unwrap_or_default(),
        }
    }
}

impl ResourceDraft {
    pub fn from_value(value: &Value) -> Self {
        Self {
            title: text_field(value, "title"),
            kind: text_field(value, "type"),
            url: text_field(value, "url"),
            description: text_field(value, "description"),
        }
    }

    fn merge_with_defaults(self) -> ResourceSpec {
        ResourceSpec {
            title: self.title.unwrap_or_else(|| "Resource".to_string()),
            kind: self
                .kind
                .as_deref()
                .map(ResourceKind::from_label)
                .unwrap_or_default(),
            url: self
                .url
                .unwrap_or_else(|| fallback::PLACEHOLDER_URL.to_string()),
            description: self.description.unwrap_or_default(),
        }
    }
}

impl From<Course> for CourseDraft {
    fn from(course: Course) -> Self {
        Self {
            title: Some(course.title),
            duration: Some(course.duration),
            summary: Some(course.summary),
            total_lessons: Some(course.total_lessons),
            estimated_time: Some(course.estimated_time),
            days: course.days.into_iter().map(DayDraft::from).collect(),
            resources: course.resources.into_iter().map(ResourceDraft::from).collect(),
        }
    }
}

impl From<DaySpec> for DayDraft {
    fn from(day: DaySpec) -> Self {
        Self {
            day: Some(day.day),
            title: Some(day.title),
            goals: day.goals,
            concepts: day.concepts,
            exercises: day.exercises,
            notes: Some(day.notes),
        }
    }
}

impl From<ResourceSpec> for ResourceDraft {
    fn from(resource: ResourceSpec) -> Self {
        let kind = match resource.kind {
            ResourceKind::Video => "video",
            ResourceKind::Article => "article",
            ResourceKind::Pdf => "pdf",
        };
        Self {
            title: Some(resource.title),
            kind: Some(kind.to_string()),
            url: Some(resource.url),
            description: Some(resource.description),
        }
    }
}

fn position(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

fn text_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(coerce_text)
}

fn list_field(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| coerce_text(item).unwrap_or_default())
                .collect()
        })
        .unwrap_or_default()
}

/// `None` only for JSON null.
fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| coerce_text(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

/// Non-negative whole numbers, from JSON numbers or numeric strings.
fn coerce_count(value: &Value) -> Option<u32> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !n.is_finite() || n < 0.0 {
        return None;
    }
    if n > f64::from(u32::MAX) {
        warn!(value = n, "count is out of range, clamping to {}", u32::MAX);
        return Some(u32::MAX);
    }
    Some(n.trunc() as u32)
}
