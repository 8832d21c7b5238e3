//! Drag-and-drop payload rules.
//!
//! A dragged item carries its project id as a plain-text payload. A list only
//! accepts a drag whose first advertised media type is plain text.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use uuid::Uuid;

use crate::project::ProjectId;

/// Media type the project id is stored under.
pub const PAYLOAD_MEDIA_TYPE: &str = "text/plain";

/// Drag effect advertised by items and requested by lists.
pub const DRAG_EFFECT: &str = "move";

/// Whether a drag advertising `types` may be dropped on a list.
#[must_use]
pub fn accepts<S: AsRef<str>>(types: &[S]) -> bool {
    types.first().is_some_and(|t| t.as_ref() == PAYLOAD_MEDIA_TYPE)
}

/// Encode a project id as a drag payload.
#[must_use]
pub fn encode_payload(id: &ProjectId) -> String {
    id.to_string()
}

/// Parse a drag payload back into a project id. Returns `None` for anything
/// that is not a well-formed id.
#[must_use]
pub fn parse_payload(payload: &str) -> Option<ProjectId> {
    match Uuid::parse_str(payload.trim()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::warn!("ignoring drop with malformed payload {payload:?}: {e}");
            None
        }
    }
}
