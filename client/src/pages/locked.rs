//! Idle-lock landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! The idle watcher hard-navigates here, so every in-memory view is already
//! gone. The page ends the API session and asks the user to sign in again.
//! It is exempt from the idle watcher itself.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::auth::LOGIN_PATH;

#[component]
pub fn LockedPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = crate::net::api::logout().await {
            log::warn!("logout after idle lock failed: {e}");
        }
        auth.set(AuthState::signed_out());
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;

    view! {
        <div class="notice-page">
            <div class="notice-card">
                <h1>"Session locked"</h1>
                <p>"You were signed out after a period of inactivity."</p>
                <a class="login-button" href=LOGIN_PATH>"Sign in again"</a>
            </div>
        </div>
    }
}
