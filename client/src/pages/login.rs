//! Login page with progressive lockout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form is gated by a [`guard::LoginGuard`] over `localStorage`. While the
//! guard is locked the API is never called: the submit control is disabled and
//! [`LockoutOverlay`] counts down. A 1 s ticker re-derives the countdown from
//! the persisted unlock instant, so reloads resume mid-lock.
//!
//! `localStorage` is only read after hydration: the server renders the
//! unlocked form, and the ticker task restores a running lock before its
//! first sleep.
//!
//! ERROR HANDLING
//! ==============
//! Every failed login call feeds the guard. The inline message never echoes
//! the API's text. Storage failures are logged and never block a sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use guard::{GuardStatus, LoginGuard};
use leptos::prelude::*;

use crate::components::lockout_overlay::LockoutOverlay;
use crate::net::api::{ApiError, is_credential_rejection};
use crate::state::auth::AuthState;
use crate::util::clock::BrowserClock;
use crate::util::storage::BrowserStorage;

pub const NETWORK_FAILURE_MESSAGE: &str = "Could not reach the server. Check your connection and try again.";

/// What the overlay needs from a locked guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LockView {
    pub remaining_secs: u64,
    pub level: u32,
}

#[must_use]
pub fn lock_view(status: GuardStatus) -> Option<LockView> {
    match status {
        GuardStatus::Locked { remaining_secs, level, .. } => Some(LockView { remaining_secs, level }),
        GuardStatus::Unlocked { .. } => None,
    }
}

/// Trim the email and reject incomplete input before touching the guard's
/// counters.
///
/// # Errors
///
/// Returns the message to show under the form.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Inline message after a counted failure. `remaining_attempts` is `None`
/// when the counters could not be saved.
#[must_use]
pub fn failure_message(err: &ApiError, remaining_attempts: Option<u32>) -> String {
    let reason = if is_credential_rejection(err) {
        "Wrong email or password"
    } else {
        "Sign-in failed, the server could not be reached"
    };
    match remaining_attempts {
        Some(left) => format!("{reason} (attempts left: {left})."),
        None => format!("{reason}."),
    }
}

fn browser_guard() -> LoginGuard<BrowserStorage, BrowserClock> {
    LoginGuard::new(BrowserStorage, BrowserClock)
}

/// Re-read the guard and mirror it into the page signals.
fn refresh_lock(lock: RwSignal<Option<LockView>>, info: RwSignal<String>) {
    match browser_guard().status() {
        Ok(status) => {
            let view = lock_view(status);
            if view.is_none() && lock.get_untracked().is_some() {
                info.set(String::new());
            }
            lock.set(view);
        }
        Err(e) => leptos::logging::warn!("login guard status failed: {e}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let lock = RwSignal::new(None::<LockView>);

    #[cfg(feature = "hydrate")]
    {
        let tick_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let tick_alive_task = tick_alive.clone();
        leptos::task::spawn_local(async move {
            match browser_guard().restore() {
                Ok(status) => lock.set(lock_view(status)),
                Err(e) => leptos::logging::warn!("login guard restore failed: {e}"),
            }
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                if !tick_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if lock.get_untracked().is_some() {
                    refresh_lock(lock, info);
                }
            }
        });
        on_cleanup(move || tick_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if browser_guard().check_submit().is_err() {
            refresh_lock(lock, info);
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(pair) => pair,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(user) => {
                        if let Err(e) = browser_guard().record_success() {
                            log::warn!("login guard reset failed: {e}");
                        }
                        let target = user.role.dashboard_path();
                        auth.set(AuthState::signed_in(user));
                        navigate(target, leptos_router::NavigateOptions::default());
                    }
                    Err(err) if crate::net::api::counts_as_failed_attempt(&err) => {
                        match browser_guard().record_failure() {
                            Ok(guard::FailureOutcome::Retry { remaining_attempts }) => {
                                info.set(failure_message(&err, Some(remaining_attempts)));
                            }
                            Ok(guard::FailureOutcome::Locked { duration_secs, level, .. }) => {
                                log::info!("login locked for {duration_secs}s (next level {level})");
                                info.set(String::new());
                                refresh_lock(lock, info);
                            }
                            Err(e) => {
                                log::warn!("login guard update failed: {e}");
                                info.set(failure_message(&err, None));
                            }
                        }
                    }
                    Err(err) => {
                        log::warn!("login request failed: {err}");
                        info.set(NETWORK_FAILURE_MESSAGE.to_owned());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, email_value, password_value);
            busy.set(false);
        }
    };

    let locked = move || lock.get().is_some();

    view! {
        <Show when=locked>
            <LockoutOverlay
                remaining_secs=Signal::derive(move || lock.get().map_or(0, |l| l.remaining_secs))
                level=Signal::derive(move || lock.get().map_or(1, |l| l.level))
            />
        </Show>
        <div class="login-page">
            <div class="login-card">
                <h1>"E-Rapor"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <Show when=move || !info.get().is_empty() && !locked()>
                    <p class="login-message login-message--error">{move || info.get()}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@school.sch.id"
                        disabled=move || busy.get() || locked()
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <div class="login-password">
                        <input
                            class="login-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Password"
                            disabled=move || busy.get() || locked()
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            class="login-password__toggle"
                            type="button"
                            disabled=locked
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <button class="login-button" type="submit" disabled=move || busy.get() || locked()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
