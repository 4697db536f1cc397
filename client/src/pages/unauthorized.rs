use leptos::prelude::*;

/// Shown when a signed-in user opens a dashboard for another role.
#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="notice-page">
            <div class="notice-card">
                <h1>"Access denied"</h1>
                <p>"You do not have access to this page. Please contact the administrator."</p>
                <a class="login-button" href="/">"Back to dashboard"</a>
            </div>
        </div>
    }
}
