use super::*;

#[test]
fn seconds_remaining_rounds_up_partial_seconds() {
    assert_eq!(seconds_remaining(0, 30_000), 30);
    assert_eq!(seconds_remaining(1, 30_000), 30);
    assert_eq!(seconds_remaining(29_001, 30_000), 1);
}

#[test]
fn seconds_remaining_is_zero_at_and_after_deadline() {
    assert_eq!(seconds_remaining(30_000, 30_000), 0);
    assert_eq!(seconds_remaining(90_000, 30_000), 0);
}

#[test]
fn seconds_remaining_survives_extreme_inputs() {
    assert_eq!(seconds_remaining(i64::MAX, i64::MIN), 0);
    assert!(seconds_remaining(i64::MIN, i64::MAX) > 0);
}

#[test]
fn format_mmss_pads_both_fields() {
    assert_eq!(format_mmss(0), "00:00");
    assert_eq!(format_mmss(9), "00:09");
    assert_eq!(format_mmss(30), "00:30");
    assert_eq!(format_mmss(60), "01:00");
    assert_eq!(format_mmss(90), "01:30");
    assert_eq!(format_mmss(600), "10:00");
}
