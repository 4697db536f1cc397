use super::*;

#[test]
fn manual_clock_clones_share_time() {
    let clock = ManualClock::new(1_000);
    let handle = clock.clone();
    handle.advance_secs(5);
    assert_eq!(clock.now_ms(), 6_000);
    handle.set(42);
    assert_eq!(clock.now_ms(), 42);
}

#[test]
fn system_clock_is_after_2020() {
    assert!(SystemClock.now_ms() > 1_577_836_800_000);
}

#[test]
fn clock_by_reference_delegates() {
    let clock = ManualClock::new(7);
    let by_ref = &clock;
    assert_eq!(Clock::now_ms(&by_ref), 7);
}
