//! HTTP access to the server's `/api` surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only talks to its own origin. The server forwards list
//! requests to the external data API and serves map configuration.

pub mod api;
