//! Utility helpers shared across client UI modules.

pub mod format;
pub mod geo;
pub mod location;
