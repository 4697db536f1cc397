//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auto_lock::AutoLockTimer;
use crate::pages::dashboard::{AdminDashboardPage, GuruDashboardPage, SiswaDashboardPage};
use crate::pages::{home::HomePage, locked::LockedPage, login::LoginPage, unauthorized::UnauthorizedPage};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="id">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context, resolves the current session once on mount,
/// and mounts the idle lock watcher alongside the routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let state = match crate::net::api::fetch_current_user().await {
            Some(user) => AuthState::signed_in(user),
            None => AuthState::signed_out(),
        };
        auth.set(state);
    });

    view! {
        <Title text="E-Rapor"/>

        <Router>
            <AutoLockTimer/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("locked") view=LockedPage/>
                <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=AdminDashboardPage/>
                <Route path=(StaticSegment("guru"), StaticSegment("dashboard")) view=GuruDashboardPage/>
                <Route path=(StaticSegment("siswa"), StaticSegment("dashboard")) view=SiswaDashboardPage/>
            </Routes>
        </Router>
    }
}
