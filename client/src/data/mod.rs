//! Static display content: floats, regions, and lessons.
//!
//! These tables are hardcoded rather than fetched; the map and Education Hub
//! render them directly.

pub mod floats;
pub mod lessons;
pub mod regions;
