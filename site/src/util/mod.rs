//! Browser helpers shared across components.

pub mod reveal;
