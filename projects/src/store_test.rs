use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use uuid::Uuid;

use super::*;

fn counting_listener(store: &mut ProjectStore) -> Rc<RefCell<usize>> {
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    store.add_listener(move |_| *sink.borrow_mut() += 1);
    count
}

// =============================================================
// create
// =============================================================

#[test]
fn new_store_is_empty() {
    let store = ProjectStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn create_appends_one_active_project() {
    let mut store = ProjectStore::new();
    let id = store.create("A", "desc!!", 3);

    assert_eq!(store.len(), 1);
    let project = store.get(&id).unwrap();
    assert_eq!(project.title, "A");
    assert_eq!(project.description, "desc!!");
    assert_eq!(project.people, 3);
    assert_eq!(project.status, ProjectStatus::Active);
}

#[test]
fn create_preserves_insertion_order() {
    let mut store = ProjectStore::new();
    let a = store.create("a", "first one", 2);
    let b = store.create("b", "second one", 2);
    let ids: Vec<_> = store.projects().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![a, b]);
}

#[test]
fn create_ids_are_unique() {
    let mut store = ProjectStore::new();
    let ids: HashSet<_> = (0..200).map(|i| store.create(format!("p{i}"), "description", 2)).collect();
    assert_eq!(ids.len(), 200);
}

#[test]
fn create_notifies_once_with_new_project() {
    let mut store = ProjectStore::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.add_listener(move |snapshot| sink.borrow_mut().push(snapshot));

    let id = store.create("A", "desc!!", 3);
    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].len(), 1);
    assert_eq!(seen[0][0].id, id);
}

// =============================================================
// move_to
// =============================================================

#[test]
fn move_changes_status_and_notifies() {
    let mut store = ProjectStore::new();
    let id = store.create("A", "desc!!", 3);
    let count = counting_listener(&mut store);

    assert!(store.move_to(&id, ProjectStatus::Finished));
    assert_eq!(store.get(&id).unwrap().status, ProjectStatus::Finished);
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn move_to_same_status_is_silent() {
    let mut store = ProjectStore::new();
    let id = store.create("A", "desc!!", 3);
    let before = store.snapshot();
    let count = counting_listener(&mut store);

    assert!(!store.move_to(&id, ProjectStatus::Active));
    assert_eq!(store.snapshot(), before);
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn move_unknown_id_is_silent() {
    let mut store = ProjectStore::new();
    store.create("A", "desc!!", 3);
    let before = store.snapshot();
    let count = counting_listener(&mut store);

    assert!(!store.move_to(&Uuid::new_v4(), ProjectStatus::Finished));
    assert_eq!(store.snapshot(), before);
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn move_back_and_forth() {
    let mut store = ProjectStore::new();
    let id = store.create("A", "desc!!", 3);
    let count = counting_listener(&mut store);

    assert!(store.move_to(&id, ProjectStatus::Finished));
    assert!(store.move_to(&id, ProjectStatus::Active));
    assert_eq!(store.get(&id).unwrap().status, ProjectStatus::Active);
    assert_eq!(*count.borrow(), 2);
}

#[test]
fn move_keeps_position() {
    let mut store = ProjectStore::new();
    let a = store.create("a", "first one", 2);
    let b = store.create("b", "second one", 2);
    store.move_to(&a, ProjectStatus::Finished);
    let ids: Vec<_> = store.projects().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![a, b]);
}

// =============================================================
// Queries
// =============================================================

#[test]
fn by_status_filters() {
    let mut store = ProjectStore::new();
    let a = store.create("a", "first one", 2);
    let b = store.create("b", "second one", 2);
    store.move_to(&b, ProjectStatus::Finished);

    let active: Vec<_> = store.by_status(ProjectStatus::Active).iter().map(|p| p.id).collect();
    let finished: Vec<_> = store.by_status(ProjectStatus::Finished).iter().map(|p| p.id).collect();
    assert_eq!(active, vec![a]);
    assert_eq!(finished, vec![b]);
}

#[test]
fn get_unknown_is_none() {
    let store = ProjectStore::new();
    assert!(store.get(&Uuid::new_v4()).is_none());
}

#[test]
fn removed_listener_stops_receiving() {
    let mut store = ProjectStore::new();
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let id = store.add_listener(move |_| *sink.borrow_mut() += 1);

    store.create("a", "first one", 2);
    assert!(store.remove_listener(id));
    store.create("b", "second one", 2);
    assert_eq!(*count.borrow(), 1);
}
