//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser adapters (`storage`, `clock`, `navigation`) isolate web-sys glue
//! from pages and components; `auth` holds the routing decision table.

pub mod auth;
pub mod clock;
pub mod navigation;
pub mod storage;
