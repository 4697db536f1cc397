//! Idle session lock watcher.
//!
//! DESIGN
//! ======
//! The watcher owns one deadline. Route changes call [`IdleWatcher::arm`],
//! which tears down the previous deadline and arms a fresh one unless the
//! route is exempt. Every qualifying interaction goes through the single
//! [`IdleWatcher::record_activity`] port; which DOM events qualify is an
//! adapter concern. The host schedules one sleeper per arming, tagged with
//! [`IdleWatcher::generation`], and hands the tag back to
//! [`IdleWatcher::wake`] when it wakes. A sleeper from an earlier arming is
//! stale; one that wakes before a deadline moved by activity sleeps again for
//! the remainder; the lock action is yielded exactly once per arming.

#[cfg(test)]
#[path = "idle_test.rs"]
mod idle_test;

use std::time::Duration;

use crate::policy::IdlePolicy;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IdleAction {
    /// Hard-navigate to `route`.
    Lock { route: String },
}

/// What a woken sleeper should do next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Wake {
    /// Belongs to an earlier arming; exit without touching anything.
    Stale,
    /// Activity moved the deadline; sleep for the remainder.
    Resleep(Duration),
    Lock { route: String },
    /// Disarmed or already fired.
    Done,
}

#[derive(Clone, Debug, Default)]
pub struct IdleWatcher {
    policy: IdlePolicy,
    deadline_ms: Option<i64>,
    fired: bool,
    generation: u64,
}

impl IdleWatcher {
    #[must_use]
    pub fn new(policy: IdlePolicy) -> Self {
        Self { policy, deadline_ms: None, fired: false, generation: 0 }
    }

    #[must_use]
    pub fn policy(&self) -> &IdlePolicy {
        &self.policy
    }

    /// Route change. Returns the delay to schedule, or `None` when `route` is
    /// exempt and the watcher stays disarmed.
    pub fn arm(&mut self, route: &str, now_ms: i64) -> Option<Duration> {
        self.cancel();
        self.fired = false;
        self.generation = self.generation.wrapping_add(1);
        if self.policy.is_exempt(route) {
            log::debug!("idle watcher disarmed on {route}");
            return None;
        }
        self.deadline_ms = Some(now_ms.saturating_add(self.timeout_ms()));
        Some(self.policy.timeout)
    }

    /// Push the deadline out by a full timeout. Ignored while disarmed, and
    /// after the lock fired until the next [`arm`](Self::arm).
    pub fn record_activity(&mut self, now_ms: i64) -> Option<Duration> {
        self.deadline_ms?;
        self.deadline_ms = Some(now_ms.saturating_add(self.timeout_ms()));
        Some(self.policy.timeout)
    }

    pub fn poll(&mut self, now_ms: i64) -> Option<IdleAction> {
        let deadline = self.deadline_ms?;
        if now_ms < deadline {
            return None;
        }
        self.deadline_ms = None;
        self.fired = true;
        log::info!("no activity for {}s, locking session", self.policy.timeout.as_secs());
        Some(IdleAction::Lock { route: self.policy.lock_route.clone() })
    }

    /// Decide what a sleeper started for `generation` does at `now_ms`.
    pub fn wake(&mut self, generation: u64, now_ms: i64) -> Wake {
        if generation != self.generation {
            return Wake::Stale;
        }
        if let Some(IdleAction::Lock { route }) = self.poll(now_ms) {
            return Wake::Lock { route };
        }
        self.remaining(now_ms).map_or(Wake::Done, Wake::Resleep)
    }

    /// Drop the pending deadline. Safe to call any number of times.
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Tag for sleepers started under the current arming.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    #[must_use]
    pub fn deadline_ms(&self) -> Option<i64> {
        self.deadline_ms
    }

    /// Time left before the deadline; zero once it passed.
    #[must_use]
    pub fn remaining(&self, now_ms: i64) -> Option<Duration> {
        let left = self.deadline_ms?.saturating_sub(now_ms);
        Some(Duration::from_millis(u64::try_from(left).unwrap_or(0)))
    }

    fn timeout_ms(&self) -> i64 {
        i64::try_from(self.policy.timeout.as_millis()).unwrap_or(i64::MAX)
    }
}
