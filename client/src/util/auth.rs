//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root redirect, the protected-route wrapper and the dashboards all
//! apply the same decision table, kept pure here so it can be tested
//! without a router.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// `/api/auth/me` has not answered yet.
    Pending,
    Allowed,
    Redirect(&'static str),
}

/// Decide whether the current user may see a route restricted to `required`
/// roles. An empty `required` list admits any signed-in user.
#[must_use]
pub fn route_access(state: &AuthState, required: &[Role]) -> RouteAccess {
    if state.loading {
        return RouteAccess::Pending;
    }
    let Some(role) = state.role() else {
        return RouteAccess::Redirect(LOGIN_PATH);
    };
    if required.is_empty() || required.contains(&role) {
        RouteAccess::Allowed
    } else {
        RouteAccess::Redirect(UNAUTHORIZED_PATH)
    }
}

/// Where `/` sends the user: their role dashboard, or the login page.
#[must_use]
pub fn home_target(state: &AuthState) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    Some(state.role().map_or(LOGIN_PATH, Role::dashboard_path))
}

/// Re-evaluate [`route_access`] whenever auth changes and follow redirects.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, required: Vec<Role>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let RouteAccess::Redirect(target) = route_access(&auth.get(), &required) {
            navigate(target, NavigateOptions::default());
        }
    });
}
