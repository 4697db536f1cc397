//! Countdown math for the lockout overlay.
//!
//! The UI re-evaluates [`seconds_remaining`] once per second against the
//! persisted unlock instant instead of decrementing a counter, so a reload
//! mid-lock resumes at the true remaining time.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

/// Whole seconds until `until_ms`, rounded up; zero once the instant passed.
#[must_use]
pub fn seconds_remaining(now_ms: i64, until_ms: i64) -> u64 {
    let delta = until_ms.saturating_sub(now_ms);
    if delta <= 0 {
        return 0;
    }
    u64::try_from(delta).map_or(0, |ms| ms.div_ceil(1000))
}

/// Render a second count as zero-padded `MM:SS`.
#[must_use]
pub fn format_mmss(total_secs: u64) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
