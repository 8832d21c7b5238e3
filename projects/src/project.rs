//! Project records.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a project.
pub type ProjectId = Uuid;

/// Which list a project belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Active,
    Finished,
}

impl ProjectStatus {
    /// Lowercase name used in element ids and config.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single project on the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Assigned at creation, never changes.
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Number of people assigned.
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// `"1 person"` or `"N persons"`.
    #[must_use]
    pub fn persons_label(&self) -> String {
        if self.people == 1 {
            "1 person".to_owned()
        } else {
            format!("{} persons", self.people)
        }
    }
}
