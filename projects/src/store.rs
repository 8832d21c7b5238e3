//! Project store.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `ProjectStore` exists per running board. The root component constructs
//! it and hands a handle to every binder; binders call the mutators and
//! register listeners to re-render. Every mutation that changes state
//! notifies all listeners before returning.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use uuid::Uuid;

use crate::observable::{ListenerId, Observable};
use crate::project::{Project, ProjectId, ProjectStatus};

/// The board's projects plus their change listeners.
#[derive(Default)]
pub struct ProjectStore {
    state: Observable<Project>,
}

impl ProjectStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new active project and notify listeners. Returns the new id.
    pub fn create(&mut self, title: impl Into<String>, description: impl Into<String>, people: u32) -> ProjectId {
        let id = self.fresh_id();
        let project = Project {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        };
        log::debug!("project created: {id} ({})", project.title);
        self.state.items_mut().push(project);
        self.state.notify_all();
        id
    }

    /// Change the status of a project and notify listeners.
    ///
    /// Unknown ids and moves to the status the project already has are
    /// ignored without notifying. Returns whether anything changed.
    pub fn move_to(&mut self, id: &ProjectId, status: ProjectStatus) -> bool {
        let Some(project) = self.state.items_mut().iter_mut().find(|p| p.id == *id) else {
            return false;
        };
        if project.status == status {
            return false;
        }
        project.status = status;
        log::debug!("project moved: {id} -> {status}");
        self.state.notify_all();
        true
    }

    /// Look up a project by id.
    #[must_use]
    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.state.items().iter().find(|p| p.id == *id)
    }

    /// All projects in creation order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        self.state.items()
    }

    /// Owned copy of all projects.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Project> {
        self.state.snapshot()
    }

    /// Projects currently in `status`, in creation order.
    #[must_use]
    pub fn by_status(&self, status: ProjectStatus) -> Vec<&Project> {
        self.state.items().iter().filter(|p| p.status == status).collect()
    }

    /// Register a listener called with a snapshot after every change.
    pub fn add_listener(&mut self, listener: impl FnMut(Vec<Project>) + 'static) -> ListenerId {
        self.state.add_listener(listener)
    }

    /// Unregister a listener.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.state.remove_listener(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    fn fresh_id(&self) -> ProjectId {
        loop {
            let id = Uuid::new_v4();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
