use uuid::Uuid;

use super::*;

fn make_project(people: u32) -> Project {
    Project {
        id: Uuid::new_v4(),
        title: "Title".into(),
        description: "Description".into(),
        people,
        status: ProjectStatus::Active,
    }
}

// =============================================================
// ProjectStatus
// =============================================================

#[test]
fn status_default_is_active() {
    assert_eq!(ProjectStatus::default(), ProjectStatus::Active);
}

#[test]
fn status_names() {
    assert_eq!(ProjectStatus::Active.as_str(), "active");
    assert_eq!(ProjectStatus::Finished.to_string(), "finished");
}

#[test]
fn status_serde_matches_names() {
    let json = serde_json::to_string(&ProjectStatus::Finished).unwrap();
    assert_eq!(json, "\"finished\"");
    let back: ProjectStatus = serde_json::from_str("\"active\"").unwrap();
    assert_eq!(back, ProjectStatus::Active);
}

// =============================================================
// persons_label
// =============================================================

#[test]
fn persons_label_singular() {
    assert_eq!(make_project(1).persons_label(), "1 person");
}

#[test]
fn persons_label_plural() {
    assert_eq!(make_project(4).persons_label(), "4 persons");
    assert_eq!(make_project(0).persons_label(), "0 persons");
}
