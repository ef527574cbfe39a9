use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub title: String,
    pub duration: String,
    pub summary: String,
    pub total_lessons: u32,
    pub estimated_time: String,
    pub days: Vec<DaySpec>,
    pub resources: Vec<ResourceSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySpec {
    pub day: u32,
    pub title: String,
    pub goals: Vec<String>,
    pub concepts: Vec<String>,
    pub exercises: Vec<String>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSpec {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Video,
    #[default]
    Article,
    Pdf,
}

impl ResourceKind {
    /// Unknown kinds become `Article`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "video" => ResourceKind::Video,
            "pdf" => ResourceKind::Pdf,
            _ => ResourceKind::Article,
        }
    }
}
