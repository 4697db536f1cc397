use super::*;

const T0: i64 = 1_700_000_000_000;
const SECOND: i64 = 1000;
const MINUTE: i64 = 60 * SECOND;

fn armed_on(route: &str) -> IdleWatcher {
    let mut watcher = IdleWatcher::new(IdlePolicy::default());
    watcher.arm(route, T0);
    watcher
}

fn lock_action() -> IdleAction {
    IdleAction::Lock { route: "/locked".to_owned() }
}

#[test]
fn arm_returns_full_timeout_on_regular_route() {
    let mut watcher = IdleWatcher::new(IdlePolicy::default());
    assert_eq!(watcher.arm("/admin/dashboard", T0), Some(Duration::from_secs(600)));
    assert!(watcher.is_active());
    assert_eq!(watcher.deadline_ms(), Some(T0 + 10 * MINUTE));
}

#[test]
fn silence_just_under_timeout_does_not_lock() {
    let mut watcher = armed_on("/guru/dashboard");
    assert_eq!(watcher.poll(T0 + 9 * MINUTE + 59 * SECOND), None);
    assert!(watcher.is_active());
}

#[test]
fn timeout_fires_exactly_once() {
    let mut watcher = armed_on("/guru/dashboard");
    assert_eq!(watcher.poll(T0 + 9 * MINUTE + 59 * SECOND), None);
    assert_eq!(watcher.poll(T0 + 10 * MINUTE), Some(lock_action()));
    assert_eq!(watcher.poll(T0 + 10 * MINUTE + SECOND), None);
    assert_eq!(watcher.poll(T0 + 60 * MINUTE), None);
    assert!(watcher.has_fired());
    assert!(!watcher.is_active());
}

#[test]
fn activity_before_deadline_moves_it() {
    let mut watcher = armed_on("/siswa/dashboard");
    let at = T0 + 9 * MINUTE + 59 * SECOND;
    assert_eq!(watcher.record_activity(at), Some(Duration::from_secs(600)));
    assert_eq!(watcher.poll(T0 + 10 * MINUTE), None);
    assert_eq!(watcher.poll(at + 10 * MINUTE - SECOND), None);
    assert_eq!(watcher.poll(at + 10 * MINUTE), Some(lock_action()));
}

#[test]
fn login_route_never_locks() {
    let mut watcher = IdleWatcher::new(IdlePolicy::default());
    assert_eq!(watcher.arm("/login", T0), None);
    assert_eq!(watcher.record_activity(T0 + SECOND), None);
    assert_eq!(watcher.poll(T0 + 24 * 60 * MINUTE), None);
    assert!(!watcher.is_active());
}

#[test]
fn locked_route_never_locks() {
    let mut watcher = armed_on("/locked");
    assert_eq!(watcher.poll(T0 + 24 * 60 * MINUTE), None);
}

#[test]
fn navigating_into_exempt_route_disarms() {
    let mut watcher = armed_on("/admin/dashboard");
    assert_eq!(watcher.arm("/login", T0 + MINUTE), None);
    assert_eq!(watcher.poll(T0 + 30 * MINUTE), None);
}

#[test]
fn navigating_out_of_exempt_route_rearms_from_now() {
    let mut watcher = armed_on("/login");
    let now = T0 + 5 * MINUTE;
    assert!(watcher.arm("/admin/dashboard", now).is_some());
    assert_eq!(watcher.poll(now + 10 * MINUTE - SECOND), None);
    assert_eq!(watcher.poll(now + 10 * MINUTE), Some(lock_action()));
}

#[test]
fn route_change_restarts_the_window() {
    let mut watcher = armed_on("/admin/dashboard");
    let later = T0 + 8 * MINUTE;
    watcher.arm("/admin/users", later);
    assert_eq!(watcher.poll(T0 + 10 * MINUTE), None);
    assert_eq!(watcher.deadline_ms(), Some(later + 10 * MINUTE));
}

#[test]
fn activity_after_fire_does_not_rearm() {
    let mut watcher = armed_on("/admin/dashboard");
    assert!(watcher.poll(T0 + 10 * MINUTE).is_some());
    assert_eq!(watcher.record_activity(T0 + 10 * MINUTE + SECOND), None);
    assert_eq!(watcher.poll(T0 + 30 * MINUTE), None);
}

#[test]
fn rearm_after_fire_clears_fired_flag() {
    let mut watcher = armed_on("/admin/dashboard");
    watcher.poll(T0 + 10 * MINUTE);
    watcher.arm("/admin/dashboard", T0 + 11 * MINUTE);
    assert!(!watcher.has_fired());
    assert!(watcher.is_active());
}

#[test]
fn cancel_is_idempotent() {
    let mut watcher = armed_on("/admin/dashboard");
    watcher.cancel();
    watcher.cancel();
    assert!(!watcher.is_active());
    assert_eq!(watcher.poll(T0 + 60 * MINUTE), None);

    let mut fired = armed_on("/admin/dashboard");
    fired.poll(T0 + 10 * MINUTE);
    fired.cancel();
    assert!(!fired.is_active());
}

#[test]
fn remaining_counts_down_to_zero() {
    let watcher = armed_on("/admin/dashboard");
    assert_eq!(watcher.remaining(T0), Some(Duration::from_secs(600)));
    assert_eq!(watcher.remaining(T0 + 9 * MINUTE), Some(Duration::from_secs(60)));
    assert_eq!(watcher.remaining(T0 + 11 * MINUTE), Some(Duration::ZERO));
    assert_eq!(IdleWatcher::default().remaining(T0), None);
}

#[test]
fn custom_lock_route_is_reported() {
    let policy = IdlePolicy {
        timeout: Duration::from_secs(5),
        exempt_routes: vec!["/login".to_owned()],
        lock_route: "/session-locked".to_owned(),
    };
    let mut watcher = IdleWatcher::new(policy);
    watcher.arm("/locked", T0);
    assert_eq!(
        watcher.poll(T0 + 5 * SECOND),
        Some(IdleAction::Lock { route: "/session-locked".to_owned() })
    );
}

#[test]
fn sleeper_from_previous_arming_is_stale() {
    let mut watcher = armed_on("/guru/dashboard");
    let old = watcher.generation();
    watcher.arm("/siswa/dashboard", T0 + MINUTE);
    assert_ne!(watcher.generation(), old);
    assert_eq!(watcher.wake(old, T0 + 30 * MINUTE), Wake::Stale);
    assert!(!watcher.has_fired());
    assert!(watcher.is_active());
}

#[test]
fn sleeper_waking_before_moved_deadline_sleeps_again() {
    let mut watcher = armed_on("/admin/dashboard");
    let generation = watcher.generation();
    watcher.record_activity(T0 + 9 * MINUTE + 59 * SECOND);
    assert_eq!(
        watcher.wake(generation, T0 + 10 * MINUTE),
        Wake::Resleep(Duration::from_secs(9 * 60 + 59))
    );
    assert!(!watcher.has_fired());
}

#[test]
fn sleeper_at_deadline_locks_once() {
    let mut watcher = armed_on("/admin/dashboard");
    let generation = watcher.generation();
    assert_eq!(
        watcher.wake(generation, T0 + 10 * MINUTE),
        Wake::Lock { route: "/locked".to_owned() }
    );
    assert_eq!(watcher.wake(generation, T0 + 11 * MINUTE), Wake::Done);
}

#[test]
fn sleeper_on_exempt_route_is_stale_after_rearm() {
    let mut watcher = armed_on("/guru/dashboard");
    let generation = watcher.generation();
    watcher.arm("/login", T0 + SECOND);
    assert_eq!(watcher.wake(generation, T0 + 20 * MINUTE), Wake::Stale);
    assert_eq!(watcher.wake(watcher.generation(), T0 + 20 * MINUTE), Wake::Done);
}
