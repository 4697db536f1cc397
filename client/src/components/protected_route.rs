//! Role-gated wrapper for authenticated screens.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::auth::{RouteAccess, install_route_guard, route_access};

/// Render `children` only for a signed-in user holding one of `roles`.
/// An empty `roles` list admits any signed-in user. Everyone else is sent to
/// `/login` or `/unauthorized` once the session check has answered.
#[component]
pub fn ProtectedRoute(#[prop(optional)] roles: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, roles.clone(), use_navigate());

    let access = move || route_access(&auth.get(), &roles);
    let pending = {
        let access = access.clone();
        move || access() == RouteAccess::Pending
    };

    view! {
        <Show
            when=move || access() == RouteAccess::Allowed
            fallback=move || {
                pending().then(|| view! { <div class="page-spinner" aria-busy="true"></div> })
            }
        >
            {children()}
        </Show>
    }
}
