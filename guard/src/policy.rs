//! Lockout and idle policies.
//!
//! Defaults carry the production constants; hosts can deserialize overrides.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Consecutive failures that trigger a lockout.
pub const MAX_ATTEMPTS: u32 = 3;
/// Lockout length at level 1; level `n` locks for `n` times this.
pub const BASE_LOCKOUT_SECS: u64 = 30;

/// Inactivity window before the session is locked.
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(10 * 60);
pub const LOGIN_ROUTE: &str = "/login";
pub const LOCKED_ROUTE: &str = "/locked";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockoutPolicy {
    pub max_attempts: u32,
    pub base_lockout_secs: u64,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self { max_attempts: MAX_ATTEMPTS, base_lockout_secs: BASE_LOCKOUT_SECS }
    }
}

impl LockoutPolicy {
    /// Lock length for a lockout triggered at `level` (levels start at 1).
    #[must_use]
    pub fn lockout_secs(&self, level: u32) -> u64 {
        self.base_lockout_secs
            .saturating_mul(u64::from(level.max(1)))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdlePolicy {
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    /// Routes on which the watcher stays disarmed.
    pub exempt_routes: Vec<String>,
    /// Route the watcher navigates to on timeout.
    pub lock_route: String,
}

impl Default for IdlePolicy {
    fn default() -> Self {
        Self {
            timeout: IDLE_TIMEOUT,
            exempt_routes: vec![LOGIN_ROUTE.to_owned(), LOCKED_ROUTE.to_owned()],
            lock_route: LOCKED_ROUTE.to_owned(),
        }
    }
}

impl IdlePolicy {
    /// Exact path match, ignoring a trailing slash.
    #[must_use]
    pub fn is_exempt(&self, route: &str) -> bool {
        let route = normalize_route(route);
        self.exempt_routes
            .iter()
            .any(|exempt| normalize_route(exempt) == route)
    }
}

fn normalize_route(route: &str) -> &str {
    let trimmed = route.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
