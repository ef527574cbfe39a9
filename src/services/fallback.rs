//! Canned course served when the model cannot produce one.

use crate::models::{Course, DaySpec, ResourceKind, ResourceSpec};

pub const FALLBACK_DURATION: &str = "5 Days";
pub const FALLBACK_TOTAL_LESSONS: u32 = 15;
pub const FALLBACK_ESTIMATED_TIME: &str = "2-3 hours/day";
pub const PLACEHOLDER_URL: &str = "https://example.com";

pub fn course_title(topic: &str) -> String {
    format!("Master {}", topic)
}

pub fn course_summary(topic: &str) -> String {
    format!(
        "A comprehensive 5-day journey to learn {} from the ground up, moving from core ideas to a finished practical project.",
        topic
    )
}

pub fn course(topic: &str) -> Course {
    Course {
        title: course_title(topic),
        duration: FALLBACK_DURATION.to_string(),
        summary: course_summary(topic),
        total_lessons: FALLBACK_TOTAL_LESSONS,
        estimated_time: FALLBACK_ESTIMATED_TIME.to_string(),
        days: days(topic),
        resources: resources(topic),
    }
}

fn day(n: u32, title: &str, goals: [String; 3], concepts: [String; 3], exercises: [String; 3], notes: String) -> DaySpec {
    DaySpec {
        day: n,
        title: title.to_string(),
        goals: goals.into(),
        concepts: concepts.into(),
        exercises: exercises.into(),
        notes,
    }
}

pub fn days(topic: &str) -> Vec<DaySpec> {
    vec![
        day(
            1,
            "Foundation & Setup",
            [
                format!("Understand what {} is and where it is used", topic),
                "Set up a working environment".to_string(),
                "Learn the essential terminology".to_string(),
            ],
            [
                format!("Core principles of {}", topic),
                "Tools and environment".to_string(),
                "Key vocabulary".to_string(),
            ],
            [
                "Install and configure the required tools".to_string(),
                format!("Write a one-page overview of {} in your own words", topic),
                "Complete a guided hello-world style exercise".to_string(),
            ],
            format!(
                "Today is about orientation. Do not try to memorize everything about {}; focus on getting a working setup and a mental map of the field that later days will fill in.",
                topic
            ),
        ),
        day(
            2,
            "Building Fundamentals",
            [
                "Master the basic building blocks".to_string(),
                "Practice the most common patterns".to_string(),
                "Build confidence through repetition".to_string(),
            ],
            [
                "Fundamental structures".to_string(),
                "Common patterns".to_string(),
                "Basic problem solving".to_string(),
            ],
            [
                "Work through five small practice problems".to_string(),
                "Recreate a simple example from scratch".to_string(),
                "Explain one concept to someone else".to_string(),
            ],
            format!(
                "Fundamentals compound. Small, repeated exercises with {} build the intuition that makes the intermediate material click.",
                topic
            ),
        ),
        day(
            3,
            "Intermediate Concepts",
            [
                "Connect the fundamentals into larger ideas".to_string(),
                "Recognize trade-offs between approaches".to_string(),
                "Read and understand real-world examples".to_string(),
            ],
            [
                "Composition of basic ideas".to_string(),
                "Trade-offs and best practices".to_string(),
                "Debugging and troubleshooting".to_string(),
            ],
            [
                "Extend yesterday's example with a new feature".to_string(),
                "Compare two approaches to the same problem".to_string(),
                "Diagnose and fix a broken example".to_string(),
            ],
            format!(
                "This is where {} starts to feel like a toolkit rather than a list of facts. Expect to be slower today; struggling here is normal.",
                topic
            ),
        ),
        day(
            4,
            "Practical Application",
            [
                "Apply what you have learned to a realistic task".to_string(),
                "Plan and scope a small project".to_string(),
                "Work independently with documentation".to_string(),
            ],
            [
                "Project planning".to_string(),
                "Real-world workflows".to_string(),
                "Using reference material".to_string(),
            ],
            [
                format!("Choose a small project that uses {}", topic),
                "Build a first working version".to_string(),
                "Write down what was hard and why".to_string(),
            ],
            "Projects expose the gaps that exercises hide. Keep the scope small enough to finish and note the questions that come up.".to_string(),
        ),
        day(
            5,
            "Mastery & Next Steps",
            [
                "Polish and present your project".to_string(),
                "Review the week's material".to_string(),
                "Build a plan for continued learning".to_string(),
            ],
            [
                "Review and consolidation".to_string(),
                "Advanced topics to explore".to_string(),
                "Communities and further resources".to_string(),
            ],
            [
                "Finish and refine your project".to_string(),
                "Summarize the five most important lessons of the week".to_string(),
                format!("Pick one advanced {} topic to study next", topic),
            ],
            format!(
                "Mastery comes from continued practice. Use today to consolidate and to choose where to take {} next.",
                topic
            ),
        ),
    ]
}

pub fn resources(topic: &str) -> Vec<ResourceSpec> {
    vec![
        ResourceSpec {
            title: format!("{} Crash Course", topic),
            kind: ResourceKind::Video,
            url: PLACEHOLDER_URL.to_string(),
            description: format!("A video walkthrough of the core ideas of {}.", topic),
        },
        ResourceSpec {
            title: format!("{} Beginner's Handbook", topic),
            kind: ResourceKind::Pdf,
            url: PLACEHOLDER_URL.to_string(),
            description: "A downloadable reference covering fundamentals and terminology.".to_string(),
        },
        ResourceSpec {
            title: format!("Getting Started with {}", topic),
            kind: ResourceKind::Article,
            url: PLACEHOLDER_URL.to_string(),
            description: "An introductory article with practical examples.".to_string(),
        },
    ]
}
