//! Progressive login lockout.
//!
//! DESIGN
//! ======
//! The guard is a thin state machine over three persisted entries:
//! `loginAttempts`, `lockoutTime` (epoch ms) and `lockoutLevel`. Every
//! operation re-reads the store, so a reload, or a second guard over the same
//! store, observes the same counters without any in-memory cache.
//!
//! States are `Unlocked(failed_attempts)` and `Locked(until, level)`:
//! - a failure below `max_attempts` stays unlocked and counts down attempts;
//! - the failure that reaches `max_attempts` locks for
//!   `base_lockout_secs * level` and bumps the level for the next lockout;
//! - expiry clears attempts and the unlock instant but keeps the level;
//! - only a successful login resets the level to 1.
//!
//! TRADE-OFFS
//! ==========
//! This is a client-side deterrent. The authentication API must enforce its
//! own limits; anything that skips the client skips this guard too.
//! The level never decays between lockouts, however far apart they are.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::countdown::seconds_remaining;
use crate::policy::LockoutPolicy;
use crate::store::{KeyValueStore, StoreError};

pub const ATTEMPTS_KEY: &str = "loginAttempts";
pub const LOCKOUT_UNTIL_KEY: &str = "lockoutTime";
pub const LOCKOUT_LEVEL_KEY: &str = "lockoutLevel";

const INITIAL_LEVEL: u32 = 1;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    /// Submission attempted while a lockout is running.
    #[error("login locked for another {remaining_secs}s")]
    Locked { remaining_secs: u64 },
    #[error("guard state could not be persisted: {0}")]
    Store(#[from] StoreError),
}

// =============================================================================
// STATE TYPES
// =============================================================================

/// Decoded persisted state. Missing or malformed entries decode to the
/// fresh-browser defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardSnapshot {
    pub failed_attempts: u32,
    pub lockout_level: u32,
    pub lockout_until_ms: Option<i64>,
}

impl Default for GuardSnapshot {
    fn default() -> Self {
        Self { failed_attempts: 0, lockout_level: INITIAL_LEVEL, lockout_until_ms: None }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardStatus {
    Unlocked { failed_attempts: u32, remaining_attempts: u32 },
    /// `level` is the persisted escalation level, already bumped for the next lockout.
    Locked { until_ms: i64, remaining_secs: u64, level: u32 },
}

impl GuardStatus {
    #[must_use]
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked { .. })
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u64 {
        match self {
            Self::Locked { remaining_secs, .. } => *remaining_secs,
            Self::Unlocked { .. } => 0,
        }
    }
}

/// Result of recording a failed login.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureOutcome {
    Retry { remaining_attempts: u32 },
    Locked { duration_secs: u64, until_ms: i64, level: u32 },
}

// =============================================================================
// LOGIN GUARD
// =============================================================================

pub struct LoginGuard<S, C> {
    store: S,
    clock: C,
    policy: LockoutPolicy,
}

impl<S: KeyValueStore, C: Clock> LoginGuard<S, C> {
    #[must_use]
    pub fn new(store: S, clock: C) -> Self {
        Self::with_policy(store, clock, LockoutPolicy::default())
    }

    #[must_use]
    pub fn with_policy(store: S, clock: C, policy: LockoutPolicy) -> Self {
        Self { store, clock, policy }
    }

    #[must_use]
    pub fn policy(&self) -> &LockoutPolicy {
        &self.policy
    }

    #[must_use]
    pub fn snapshot(&self) -> GuardSnapshot {
        let failed_attempts = self.read_number::<u32>(ATTEMPTS_KEY).unwrap_or(0);
        let lockout_level = match self.read_number::<u32>(LOCKOUT_LEVEL_KEY) {
            Some(level) if level >= INITIAL_LEVEL => level,
            Some(level) => {
                log::warn!("ignoring out-of-range {LOCKOUT_LEVEL_KEY} value {level}");
                INITIAL_LEVEL
            }
            None => INITIAL_LEVEL,
        };
        let lockout_until_ms = self.read_number::<i64>(LOCKOUT_UNTIL_KEY);
        GuardSnapshot { failed_attempts, lockout_level, lockout_until_ms }
    }

    /// Page-load entry point: resumes a running lockout with its true
    /// remaining time, or unlocks one that expired while the page was closed.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::Store`] if an expired lock cannot be cleared.
    pub fn restore(&self) -> Result<GuardStatus, GuardError> {
        let status = self.status()?;
        if let GuardStatus::Locked { remaining_secs, level, .. } = status {
            log::info!("resuming login lockout: {remaining_secs}s left at level {level}");
        }
        Ok(status)
    }

    /// Current status. A lock whose instant has passed is released here, which
    /// is what the once-per-second countdown tick relies on.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::Store`] if an expired lock cannot be cleared.
    pub fn status(&self) -> Result<GuardStatus, GuardError> {
        let snapshot = self.snapshot();
        let now = self.clock.now_ms();

        if let Some(until_ms) = snapshot.lockout_until_ms {
            if now < until_ms {
                return Ok(GuardStatus::Locked {
                    until_ms,
                    remaining_secs: seconds_remaining(now, until_ms),
                    level: snapshot.lockout_level,
                });
            }
            self.unlock()?;
            return Ok(self.unlocked_status(0));
        }

        Ok(self.unlocked_status(snapshot.failed_attempts))
    }

    /// Gate for the submit action. Callers must not contact the
    /// authentication endpoint when this fails.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::Locked`] while a lockout is running.
    pub fn check_submit(&self) -> Result<(), GuardError> {
        match self.status()? {
            GuardStatus::Locked { remaining_secs, .. } => Err(GuardError::Locked { remaining_secs }),
            GuardStatus::Unlocked { .. } => Ok(()),
        }
    }

    /// Apply a failed authentication attempt.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::Locked`] if called during a lockout, or
    /// [`GuardError::Store`] if the new counters cannot be persisted.
    pub fn record_failure(&self) -> Result<FailureOutcome, GuardError> {
        if let GuardStatus::Locked { remaining_secs, .. } = self.status()? {
            return Err(GuardError::Locked { remaining_secs });
        }

        let snapshot = self.snapshot();
        let attempts = snapshot.failed_attempts.saturating_add(1);
        self.store.set(ATTEMPTS_KEY, &attempts.to_string())?;

        if attempts < self.policy.max_attempts {
            return Ok(FailureOutcome::Retry { remaining_attempts: self.policy.max_attempts - attempts });
        }

        let level = snapshot.lockout_level;
        let duration_secs = self.policy.lockout_secs(level);
        let duration_ms = i64::try_from(duration_secs.saturating_mul(1000)).unwrap_or(i64::MAX);
        let until_ms = self.clock.now_ms().saturating_add(duration_ms);
        let next_level = level.saturating_add(1);

        // Level first: a failed write must never leave a lock without escalation.
        self.store
            .set(LOCKOUT_LEVEL_KEY, &next_level.to_string())?;
        self.store
            .set(LOCKOUT_UNTIL_KEY, &until_ms.to_string())?;

        log::warn!("login locked for {duration_secs}s after {attempts} failed attempts (level {level})");
        Ok(FailureOutcome::Locked { duration_secs, until_ms, level: next_level })
    }

    /// Successful login: the only transition that resets the level.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::Store`] if the entries cannot be removed.
    pub fn record_success(&self) -> Result<(), GuardError> {
        self.unlock()?;
        self.store.clear(LOCKOUT_LEVEL_KEY)?;
        Ok(())
    }

    /// Release a lock (or reset the attempt counter) while keeping the level.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::Store`] if the entries cannot be removed.
    pub fn unlock(&self) -> Result<(), GuardError> {
        self.store.clear(ATTEMPTS_KEY)?;
        self.store.clear(LOCKOUT_UNTIL_KEY)?;
        Ok(())
    }

    fn unlocked_status(&self, failed_attempts: u32) -> GuardStatus {
        GuardStatus::Unlocked {
            failed_attempts,
            remaining_attempts: self
                .policy
                .max_attempts
                .saturating_sub(failed_attempts),
        }
    }

    fn read_number<T>(&self, key: &str) -> Option<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.store.get(key)?;
        match raw.trim().parse::<T>() {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("ignoring malformed {key} value {raw:?}: {e}");
                None
            }
        }
    }
}
