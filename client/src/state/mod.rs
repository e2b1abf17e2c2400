//! Dashboard state: the view shell plus one slice per panel.
//!
//! DESIGN
//! ======
//! Every module here is plain data with pure `reduce` functions, so panel
//! behavior is tested without rendering. Components hold the single
//! `RwSignal<DashboardState>` from context and dispatch [`nav::Action`]s.

pub mod alerts;
pub mod business;
pub mod education;
pub mod fetch;
pub mod insights;
pub mod map;
pub mod nav;
pub mod progress;
