#![cfg(not(feature = "hydrate"))]

use super::*;
use guard::{GuardStatus, LoginGuard, ManualClock};

#[test]
fn reads_are_empty_outside_browser() {
    assert_eq!(BrowserStorage.get("loginAttempts"), None);
}

#[test]
fn writes_report_unavailable_outside_browser() {
    assert_eq!(BrowserStorage.set("loginAttempts", "1"), Err(StoreError::Unavailable));
    assert_eq!(BrowserStorage.clear("loginAttempts"), Err(StoreError::Unavailable));
}

#[test]
fn guard_over_unavailable_storage_reads_as_fresh() {
    let guard = LoginGuard::new(BrowserStorage, ManualClock::new(0));
    assert_eq!(
        guard.restore().unwrap(),
        GuardStatus::Unlocked { failed_attempts: 0, remaining_attempts: 3 }
    );
    assert!(guard.check_submit().is_ok());
}
