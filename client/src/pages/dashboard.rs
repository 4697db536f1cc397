//! Per-role dashboard landing screens.
//!
//! Each role gets the same greeting card behind a [`ProtectedRoute`]
//! restricted to that role. Sign-out ends the API session and returns to
//! `/login`.

use leptos::prelude::*;

use crate::components::protected_route::ProtectedRoute;
use crate::net::types::Role;
use crate::state::auth::AuthState;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! { <DashboardPage role=Role::Admin/> }
}

#[component]
pub fn GuruDashboardPage() -> impl IntoView {
    view! { <DashboardPage role=Role::Guru/> }
}

#[component]
pub fn SiswaDashboardPage() -> impl IntoView {
    view! { <DashboardPage role=Role::Siswa/> }
}

#[component]
fn DashboardPage(role: Role) -> impl IntoView {
    view! {
        <ProtectedRoute roles=vec![role]>
            <DashboardCard role=role/>
        </ProtectedRoute>
    }
}

#[component]
fn DashboardCard(role: Role) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let busy = RwSignal::new(false);

    let name = move || auth.get().user.map(|u| u.name).unwrap_or_default();

    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::logout().await {
                log::warn!("logout failed: {e}");
            }
            auth.set(AuthState::signed_out());
            crate::util::navigation::hard_navigate(crate::util::auth::LOGIN_PATH);
        });
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"E-Rapor"</h1>
                <span class="dashboard-header__role">{role.label()}</span>
                <button class="login-button" on:click=on_logout disabled=move || busy.get()>
                    "Sign out"
                </button>
            </header>
            <section class="dashboard-card">
                <h2>{move || format!("Welcome, {}", name())}</h2>
                <p>{format!("Signed in to the {} dashboard.", role.label())}</p>
            </section>
        </div>
    }
}
