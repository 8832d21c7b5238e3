//! Browser helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser APIs (alerts, drag data, DOM lookups) from
//! component logic. Outside the `csr` build each helper degrades to a no-op
//! or a default so the crate still compiles and tests natively.

pub mod alert;
pub mod config;
pub mod drag;
