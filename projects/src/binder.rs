//! Binder controllers for the board UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser front end renders three kinds of binder: the input form, one
//! list per [`ProjectStatus`], and one item per project in a list. The view
//! layer owns the DOM and the event wiring; the controllers here own what each
//! binder shows, where it is placed, and what it does to the store.
//!
//! DESIGN
//! ======
//! Every binder implements [`Binder`]: `mount` says where its fragment goes
//! and `render_content` produces what it displays. Wiring (event handlers,
//! store listeners) is done by the view layer with the controller methods
//! below. Controllers never hold a store borrow across a listener call, so
//! handlers can update a controller and the store one after the other.

#[cfg(test)]
#[path = "binder_test.rs"]
mod binder_test;

use std::collections::VecDeque;

use crate::config::FormRules;
use crate::drag;
use crate::project::{Project, ProjectId, ProjectStatus};
use crate::store::ProjectStore;
use crate::validate::{FieldValue, Violation, violations};

pub const INPUT_TEMPLATE_ID: &str = "project-input";
pub const LIST_TEMPLATE_ID: &str = "project-list";
pub const ITEM_TEMPLATE_ID: &str = "single-project";
pub const INPUT_ELEMENT_ID: &str = "user-input";

/// Where a fragment is inserted relative to its host's existing children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertAt {
    Start,
    End,
}

/// Placement of a binder's fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mount {
    /// Template the fragment is built from; also its root CSS class.
    pub template_id: &'static str,
    /// Id of the element the fragment is inserted into.
    pub host_id: String,
    pub position: InsertAt,
    /// Explicit id assigned to the fragment's root element.
    pub element_id: Option<String>,
}

/// Order children the way successive inserts into one host would leave them:
/// `Start` inserts go before everything present, `End` inserts after.
pub fn arrange<T>(children: impl IntoIterator<Item = (InsertAt, T)>) -> Vec<T> {
    let mut out = VecDeque::new();
    for (position, child) in children {
        match position {
            InsertAt::Start => out.push_front(child),
            InsertAt::End => out.push_back(child),
        }
    }
    out.into()
}

/// Common capability of the three binders.
pub trait Binder {
    /// What the binder displays.
    type Content;

    /// Where the binder's fragment is placed.
    fn mount(&self) -> Mount;

    /// Build the displayed content from current data.
    fn render_content(&self) -> Self::Content;
}

// =============================================================================
// Input form
// =============================================================================

/// The three project input fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    People,
}

/// Reason a form submission was rejected. Displays as the message shown to
/// the user.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Invalid input, please try again!")]
    Invalid { field: Field, violations: Vec<Violation> },
    #[error("Invalid input, please try again!")]
    NotANumber(String),
}

impl FormError {
    /// The field that failed.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::Invalid { field, .. } => *field,
            Self::NotANumber(_) => Field::People,
        }
    }
}

/// Raw values of the input form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub people: String,
    host_id: String,
}

impl ProjectForm {
    /// Empty form mounted into `host_id`.
    pub fn new(host_id: impl Into<String>) -> Self {
        Self { host_id: host_id.into(), ..Self::default() }
    }

    /// Validate the fields and return `(title, description, people)`.
    ///
    /// Fields are checked title, description, people; the first failure is
    /// returned. The count accepts whole numbers written either way a number
    /// input may report them (`"5"` or `"5.0"`). A project always has at
    /// least one person: a blank or zero count is refused even when the
    /// configured rules would let it through.
    ///
    /// # Errors
    ///
    /// [`FormError::NotANumber`] if people is not a whole number, otherwise
    /// [`FormError::Invalid`] naming the first field that breaks its rules.
    pub fn gather(&self, rules: &FormRules) -> Result<(String, String, u32), FormError> {
        check(Field::Title, violations(&rules.title.to_validatable(self.title.as_str())))?;
        check(Field::Description, violations(&rules.description.to_validatable(self.description.as_str())))?;

        let raw = self.people.trim();
        let people = if raw.is_empty() {
            None
        } else {
            Some(parse_count(raw).ok_or_else(|| FormError::NotANumber(self.people.clone()))?)
        };
        // A blank count is checked as empty text, so only `required` applies to it.
        let value = people.map_or_else(|| FieldValue::Text(String::new()), FieldValue::from);
        check(Field::People, violations(&rules.people.to_validatable(value)))?;

        match people {
            None => Err(FormError::Invalid { field: Field::People, violations: vec![Violation::Required] }),
            Some(0) => Err(FormError::Invalid { field: Field::People, violations: vec![Violation::TooSmall(0.0)] }),
            Some(n) => Ok((self.title.clone(), self.description.clone(), n)),
        }
    }

    /// Create a project from the fields and clear them.
    ///
    /// Nothing is mutated when validation fails; the fields keep their values
    /// so the user can correct them.
    ///
    /// # Errors
    ///
    /// Any error from [`ProjectForm::gather`].
    pub fn submit(&mut self, rules: &FormRules, store: &mut ProjectStore) -> Result<ProjectId, FormError> {
        let (title, description, people) = self.gather(rules).inspect_err(|e| {
            log::warn!("project form rejected: {:?} field", e.field());
        })?;
        let id = store.create(title, description, people);
        self.clear();
        Ok(id)
    }

    /// Reset all fields to empty.
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}

/// Whole, non-negative count in `u32` range. `"5.0"` counts as 5, `"2.5"`
/// does not.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::float_cmp)]
fn parse_count(raw: &str) -> Option<u32> {
    if let Ok(n) = raw.parse::<u32>() {
        return Some(n);
    }
    match raw.parse::<f64>() {
        Ok(n) if n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&n) => Some(n as u32),
        _ => None,
    }
}

fn check(field: Field, violations: Vec<Violation>) -> Result<(), FormError> {
    if violations.is_empty() { Ok(()) } else { Err(FormError::Invalid { field, violations }) }
}

impl Binder for ProjectForm {
    type Content = ();

    fn mount(&self) -> Mount {
        Mount {
            template_id: INPUT_TEMPLATE_ID,
            host_id: self.host_id.clone(),
            position: InsertAt::Start,
            element_id: Some(INPUT_ELEMENT_ID.to_owned()),
        }
    }

    fn render_content(&self) {}
}

// =============================================================================
// List
// =============================================================================

/// One status column: the projects it currently shows and its drop zone.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectList {
    category: ProjectStatus,
    host_id: String,
    assigned: Vec<Project>,
    droppable: bool,
}

impl ProjectList {
    /// Empty list for `category`, mounted into `host_id`.
    pub fn new(category: ProjectStatus, host_id: impl Into<String>) -> Self {
        Self { category, host_id: host_id.into(), assigned: Vec::new(), droppable: false }
    }

    #[must_use]
    pub fn category(&self) -> ProjectStatus {
        self.category
    }

    /// Projects remembered from the last snapshot.
    #[must_use]
    pub fn assigned(&self) -> &[Project] {
        &self.assigned
    }

    /// Whether a drag is currently hovering over the list.
    #[must_use]
    pub fn is_droppable(&self) -> bool {
        self.droppable
    }

    /// Id of the `<ul>` items are inserted into.
    #[must_use]
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.category)
    }

    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.category.as_str().to_uppercase())
    }

    /// Replace the remembered projects with the ones in `snapshot` that
    /// belong to this list.
    pub fn apply_snapshot(&mut self, snapshot: &[Project]) {
        self.assigned = snapshot.iter().filter(|p| p.status == self.category).cloned().collect();
    }

    /// A drag moved over the list. Returns true when the drop should be
    /// allowed, in which case the caller prevents the default handling.
    pub fn drag_over<S: AsRef<str>>(&mut self, types: &[S]) -> bool {
        if drag::accepts(types) {
            self.droppable = true;
            true
        } else {
            false
        }
    }

    pub fn drag_leave(&mut self) {
        self.droppable = false;
    }

    /// A payload was dropped on the list. Returns the project to move into
    /// [`ProjectList::category`], if the payload names one.
    pub fn accept_drop(&mut self, payload: &str) -> Option<ProjectId> {
        self.droppable = false;
        drag::parse_payload(payload)
    }
}

impl Binder for ProjectList {
    type Content = Vec<ProjectItem>;

    fn mount(&self) -> Mount {
        Mount {
            template_id: LIST_TEMPLATE_ID,
            host_id: self.host_id.clone(),
            position: InsertAt::End,
            element_id: Some(format!("{}-projects", self.category)),
        }
    }

    /// A fresh item binder per assigned project, in store order.
    fn render_content(&self) -> Vec<ProjectItem> {
        let host = self.list_id();
        self.assigned.iter().map(|p| ProjectItem::new(p.clone(), host.clone())).collect()
    }
}

// =============================================================================
// Item
// =============================================================================

/// One project rendered inside a list.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectItem {
    project: Project,
    host_id: String,
}

/// Text shown by an item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemContent {
    pub title: String,
    pub assigned: String,
    pub description: String,
}

impl ProjectItem {
    pub fn new(project: Project, host_id: impl Into<String>) -> Self {
        Self { project, host_id: host_id.into() }
    }

    #[must_use]
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Text payload set when a drag starts.
    #[must_use]
    pub fn drag_payload(&self) -> String {
        drag::encode_payload(&self.project.id)
    }
}

impl Binder for ProjectItem {
    type Content = ItemContent;

    fn mount(&self) -> Mount {
        Mount {
            template_id: ITEM_TEMPLATE_ID,
            host_id: self.host_id.clone(),
            position: InsertAt::End,
            element_id: Some(self.project.id.to_string()),
        }
    }

    fn render_content(&self) -> ItemContent {
        ItemContent {
            title: self.project.title.clone(),
            assigned: format!("{} assigned", self.project.persons_label()),
            description: self.project.description.clone(),
        }
    }
}
