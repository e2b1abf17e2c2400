//! Dashboard panels and shared chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each panel reads its slice of the shell's `RwSignal<DashboardState>` from
//! context and changes it only by dispatching actions. Fetched data stays in
//! per-panel hook state and is never shared across panels.

pub mod ai_insights;
pub mod business_applications;
pub mod disaster_warning;
pub mod education_hub;
pub mod fetch_status;
pub mod nav_bar;
pub mod ocean_map;
