//! Full-screen overlay shown while the login guard is locked.

#[cfg(test)]
#[path = "lockout_overlay_test.rs"]
mod lockout_overlay_test;

use guard::countdown::format_mmss;
use leptos::prelude::*;

/// Badge text for repeated lockouts. Shown from the second lockout on, i.e.
/// when the persisted level (already bumped) is above 2.
#[must_use]
pub fn repeat_violation_label(level: u32) -> Option<String> {
    (level > 2).then(|| format!("Repeated violation (level {})", level - 1))
}

/// Caption under the countdown; longer locks explain the escalation.
#[must_use]
pub fn countdown_caption(remaining_secs: u64) -> &'static str {
    if remaining_secs > 60 {
        "Lock extended because of repeated failures"
    } else {
        "seconds"
    }
}

#[component]
pub fn LockoutOverlay(
    #[prop(into)] remaining_secs: Signal<u64>,
    #[prop(into)] level: Signal<u32>,
) -> impl IntoView {
    view! {
        <div class="lockout-overlay" role="alertdialog" aria-live="assertive">
            <div class="lockout-card">
                <h2 class="lockout-card__title">"Access temporarily frozen"</h2>
                <p class="lockout-card__body">
                    "Too many failed sign-in attempts. To protect student records, sign-in is paused."
                </p>
                {move || {
                    repeat_violation_label(level.get())
                        .map(|label| view! { <span class="lockout-card__badge">{label}</span> })
                }}
                <div class="lockout-card__timer">
                    <span class="lockout-card__hint">"Try again in"</span>
                    <div class="lockout-card__countdown">{move || format_mmss(remaining_secs.get())}</div>
                    <span class="lockout-card__hint">{move || countdown_caption(remaining_secs.get())}</span>
                </div>
            </div>
        </div>
    }
}
