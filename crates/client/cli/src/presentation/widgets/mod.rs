//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads state and renders to a terminal
//! frame, with no side effects.

pub mod buttons;
pub mod footer;
pub mod header;
