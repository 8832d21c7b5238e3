//! Board UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component is the view half of a `projects::binder` controller: it
//! renders the controller's content at the controller's mount point and wires
//! browser events back to the controller and the shared store.

pub mod project_card;
pub mod project_input_panel;
pub mod project_list_panel;
