use course_forge::error::AppError;
use course_forge::models::{Course, DaySpec, ResourceKind, ResourceSpec};
use course_forge::services::course_service::{CourseSource, resolve};
use course_forge::services::fallback;
use course_forge::services::normalizer::normalize;
use serde_json::json;

fn sample_course() -> Course {
    Course {
        title: "Intro to Knitting".to_string(),
        duration: "5 Days".to_string(),
        summary: "Learn to knit a scarf.".to_string(),
        total_lessons: 12,
        estimated_time: "1 hour/day".to_string(),
        days: vec![
            DaySpec {
                day: 1,
                title: "Casting On".to_string(),
                goals: vec!["Cast on 20 stitches".to_string()],
                concepts: vec!["Slip knot".to_string(), "Long-tail cast on".to_string()],
                exercises: vec!["Practice three cast-ons".to_string()],
                notes: "Keep the tension loose.".to_string(),
            },
            DaySpec {
                day: 2,
                title: "Knit Stitch".to_string(),
                goals: vec![],
                concepts: vec!["Garter stitch".to_string()],
                exercises: vec!["Knit ten rows".to_string()],
                notes: String::new(),
            },
        ],
        resources: vec![ResourceSpec {
            title: "Knitting Basics".to_string(),
            kind: ResourceKind::Video,
            url: "https://example.org/knit".to_string(),
            description: "Video lessons.".to_string(),
        }],
    }
}

#[test]
fn valid_course_passes_through_unchanged() {
    let course = sample_course();
    let value = serde_json::to_value(&course).unwrap();
    assert_eq!(normalize(Some(&value), "Knitting"), course);
}

#[test]
fn missing_and_empty_candidates_use_template() {
    let from_none = normalize(None, "X");
    let from_empty = normalize(Some(&json!({})), "X");

    assert_eq!(from_none, from_empty);
    assert_eq!(from_none, fallback::course("X"));
    assert!(!from_none.days.is_empty());
    assert!(!from_none.resources.is_empty());
}

#[test]
fn non_array_days_use_template_days() {
    let course = normalize(Some(&json!({"days": "not-an-array"})), "X");
    assert_eq!(course.days, fallback::days("X"));
}

#[test]
fn empty_arrays_use_templates() {
    let course = normalize(Some(&json!({"days": [], "resources": []})), "X");
    assert_eq!(course.days.len(), 5);
    assert_eq!(course.resources, fallback::resources("X"));
}

#[test]
fn unknown_resource_type_becomes_article() {
    let course = normalize(Some(&json!({"resources": [{"type": "bogus"}]})), "X");
    assert_eq!(course.resources[0].kind, ResourceKind::Article);
    assert_eq!(course.resources[0].title, "Resource");
    assert_eq!(course.resources[0].url, fallback::PLACEHOLDER_URL);
    assert_eq!(course.resources[0].description, "");
}

#[test]
fn resource_type_ignores_case_and_padding() {
    let course = normalize(Some(&json!({"resources": [{"type": " PDF "}, {"type": 3}]})), "X");
    assert_eq!(course.resources[0].kind, ResourceKind::Pdf);
    assert_eq!(course.resources[1].kind, ResourceKind::Article);
}

#[test]
fn days_are_numbered_by_position() {
    let course = normalize(Some(&json!({"days": [{"title": "X"}, {"title": "Y"}]})), "T");
    assert_eq!(course.days[0].day, 1);
    assert_eq!(course.days[1].day, 2);
    assert_eq!(course.days[1].title, "Y");
}

#[test]
fn malformed_day_fields_get_defaults() {
    let course = normalize(
        Some(&json!({"days": ["just a string", {"goals": "read", "concepts": null, "notes": 5}]})),
        "T",
    );
    assert_eq!(course.days[0].title, "Day 1");
    assert!(course.days[0].goals.is_empty());
    assert!(course.days[1].goals.is_empty());
    assert!(course.days[1].concepts.is_empty());
    assert_eq!(course.days[1].notes, "5");
}

#[test]
fn non_object_candidate_is_tolerated() {
    let course = normalize(Some(&json!("the model said no")), "Go");
    assert_eq!(course.title, "Master Go");
    assert_eq!(course.days.len(), 5);
}

#[test]
fn null_fields_take_defaults_with_topic() {
    let course = normalize(Some(&json!({"title": null, "summary": null, "totalLessons": null})), "Jazz");
    assert_eq!(course.title, "Master Jazz");
    assert!(course.summary.contains("Jazz"));
    assert_eq!(course.total_lessons, 15);
}

#[test]
fn resolve_uses_candidate_on_success() {
    let generated = resolve(Ok(json!({"title": "Custom"})), "T");
    assert_eq!(generated.source, CourseSource::Model);
    assert_eq!(generated.course.title, "Custom");
}

#[test]
fn resolve_falls_back_on_any_failure() {
    let parse_err = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
    for failure in [AppError::Model("quota".to_string()), AppError::Parse(parse_err)] {
        let generated = resolve(Err(failure), "Rust");
        assert_eq!(generated.source, CourseSource::Fallback);
        assert_eq!(generated.course, fallback::course("Rust"));
    }
}
