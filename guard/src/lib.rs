//! Session guard core for the E-Rapor client.
//!
//! This crate holds the two time-driven state machines of the login flow and
//! keeps them free of any browser dependency. The `client` crate supplies the
//! adapters (localStorage, `Date.now()`, DOM listeners, gloo timers) and the
//! host drives the machines through the ports defined here.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`login`] | Progressive login lockout ([`login::LoginGuard`]) |
//! | [`idle`] | Idle session lock watcher ([`idle::IdleWatcher`]) |
//! | [`countdown`] | Remaining-seconds math and `MM:SS` formatting |
//! | [`policy`] | Lockout and idle policies with their default constants |
//! | [`store`] | Key-value persistence port and the in-memory store |
//! | [`clock`] | Wall-clock port and the manual test clock |

pub mod clock;
pub mod countdown;
pub mod idle;
pub mod login;
pub mod policy;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use idle::{IdleAction, IdleWatcher, Wake};
pub use login::{FailureOutcome, GuardError, GuardSnapshot, GuardStatus, LoginGuard};
pub use policy::{IdlePolicy, LockoutPolicy};
pub use store::{KeyValueStore, MemoryStore, StoreError};
