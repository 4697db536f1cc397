//! Hydration order: browser-only state must not shape the first render.
//!
//! The server cannot see `localStorage`, so it always renders the login form
//! unlocked. If the hydrating client read a persisted lock while building the
//! view, a reload mid-lock would render the overlay where the server sent
//! the form and hydration would panic. The guard must be restored from a
//! task that runs after hydration.

use std::fs;

const LOGIN_PAGE: &str = "src/pages/login.rs";

fn login_page_body() -> String {
    let source = fs::read_to_string(LOGIN_PAGE).unwrap_or_else(|e| panic!("read {LOGIN_PAGE}: {e}"));
    let start = source.find("pub fn LoginPage()").expect("LoginPage component");
    source[start..].to_owned()
}

#[test]
fn lock_starts_unlocked_on_both_sides() {
    let body = login_page_body();
    assert!(body.contains("let lock = RwSignal::new(None::<LockView>);"));
}

#[test]
fn guard_restore_runs_inside_post_hydration_task() {
    let body = login_page_body();
    let spawn = body.find("spawn_local(").expect("ticker task");
    let restore = body.find(".restore()").expect("guard restore on load");
    assert!(restore > spawn, "guard restored before hydration finished");
}

#[test]
fn restore_precedes_first_tick() {
    let body = login_page_body();
    let restore = body.find(".restore()").expect("guard restore on load");
    let sleep = body.find("sleep(").expect("ticker sleep");
    assert!(restore < sleep, "a reload mid-lock would show the form for a full tick");
}
