//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The dashboard is the only page. It owns view selection and delegates
//! each panel's rendering to `components`.

pub mod dashboard;
