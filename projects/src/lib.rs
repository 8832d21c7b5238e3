//! Core model for the project board: validation, the observable project
//! store, and the binder controllers the browser front end drives.
//!
//! This crate has no browser dependencies. The `client` crate owns the DOM
//! and event wiring and calls into these types from its Leptos components;
//! everything here can be exercised with plain `cargo test`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`validate`] | Declarative per-field constraints and the validator |
//! | [`project`] | Project record, status, and id types |
//! | [`observable`] | Generic entity list with ordered change listeners |
//! | [`store`] | Project store: create, move, lookup |
//! | [`binder`] | Input form, list, and item controllers plus mount placement |
//! | [`drag`] | Drag payload media type and payload parsing |
//! | [`config`] | Board configuration and form rules |

pub mod binder;
pub mod config;
pub mod drag;
pub mod observable;
pub mod project;
pub mod store;
pub mod validate;
