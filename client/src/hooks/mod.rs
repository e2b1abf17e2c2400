//! Reactive hooks binding pure state machines to the Leptos runtime.
//!
//! ARCHITECTURE
//! ============
//! Hooks own the only async and timer code in the client. The state they
//! drive (`state::fetch`, `state::progress`) stays synchronous and testable.

pub mod use_fetch;
pub mod use_training;
