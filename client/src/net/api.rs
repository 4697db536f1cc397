//! REST helpers for the E-Rapor auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! same-origin `/api` prefix, which the host forwards to the E-Rapor API.
//! Server-side (SSR): stubs returning `None`/[`ApiError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed [`ApiError`]s. Every failed login call counts toward the
//! lockout (see [`counts_as_failed_attempt`]); only the server-side stub is
//! exempt. [`is_credential_rejection`] picks the message shown to the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
pub const ME_ENDPOINT: &str = "/api/auth/me";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Map a non-2xx response to an [`ApiError`], preferring the API's own message.
#[must_use]
pub fn status_error(status: u16, message: Option<String>) -> ApiError {
    if status == 401 {
        return ApiError::Unauthorized;
    }
    let message = message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("API error: {status}"));
    ApiError::Status { status, message }
}

/// Whether a login error feeds the lockout counters. Everything but the
/// server-side stub does, throttling and transport failures included.
#[must_use]
pub fn counts_as_failed_attempt(err: &ApiError) -> bool {
    !matches!(err, ApiError::Unavailable)
}

/// Whether a login error means the credentials themselves were rejected.
#[must_use]
pub fn is_credential_rejection(err: &ApiError) -> bool {
    match err {
        ApiError::Unauthorized => true,
        ApiError::Status { status, .. } => (400..500).contains(status) && *status != 429,
        ApiError::Network(_) | ApiError::Decode(_) | ApiError::Unavailable => false,
    }
}

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> ApiError {
    let message = resp
        .json::<super::types::ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    status_error(resp.status(), message)
}

/// Authenticate via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] for rejected credentials, or another
/// variant for transport, status and decode failures.
pub async fn login(email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::LoginRequest { email, password };
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        let parsed: super::types::LoginResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(parsed.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// End the session via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the API rejects it.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the signed-in user from `GET /api/auth/me`.
/// Returns `None` when not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ME_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<super::types::MeResponse>()
            .await
            .ok()
            .map(|body| body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
