//! Networking modules for the E-Rapor REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the auth calls and `types` defines the wire schema. All
//! requests go to the same-origin `/api` prefix served by the host.

pub mod api;
pub mod types;
