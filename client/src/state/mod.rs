//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The board has exactly one project store. It is created by the root
//! component and reached through context, never through a global.

pub mod board;
