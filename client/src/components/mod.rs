//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared auth state from Leptos context and wrap the pure
//! guard state machines with DOM and timer plumbing.

pub mod auto_lock;
pub mod lockout_overlay;
pub mod protected_route;
