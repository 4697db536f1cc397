//! `/api/*` forwarder to the E-Rapor REST API.
//!
//! DESIGN
//! ======
//! The browser only ever talks to this host. Requests are replayed upstream
//! with a fixed allow-list of headers; responses come back with their status,
//! content type and `Set-Cookie` headers. Any `Domain` attribute is stripped
//! from cookies so they bind to this host instead of the API's.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures become `502` with a JSON `{"message"}` body, the same
//! shape the API uses, so the client's error mapping needs no special case.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

const API_PREFIX: &str = "/api";
const FORWARDED_REQUEST_HEADERS: [HeaderName; 4] = [CONTENT_TYPE, ACCEPT, AUTHORIZATION, COOKIE];

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("E-Rapor API timed out")]
    Timeout,
    #[error("E-Rapor API unreachable: {0}")]
    Upstream(String),
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout } else { Self::Upstream(e.to_string()) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "api proxy failed");
        let message = match self {
            Self::Timeout => "The E-Rapor server took too long to respond.",
            Self::Upstream(_) => "The E-Rapor server is unreachable.",
        };
        (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "message": message }))).into_response()
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Map a request on this host to the upstream URL. `request_path` keeps its
/// percent-encoding; the `/api` prefix is replaced by `base`.
#[must_use]
pub fn upstream_url(base: &str, request_path: &str, query: Option<&str>) -> String {
    let rest = request_path.strip_prefix(API_PREFIX).unwrap_or(request_path);
    let mut url = format!("{}/{}", base.trim_end_matches('/'), rest.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// Drop the `Domain` attribute from a `Set-Cookie` value.
#[must_use]
pub fn rewrite_set_cookie(raw: &str) -> String {
    raw.split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty() && !part.to_ascii_lowercase().starts_with("domain="))
        .collect::<Vec<_>>()
        .join("; ")
}

fn response_headers(upstream: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    if let Some(content_type) = upstream.get(CONTENT_TYPE) {
        out.insert(CONTENT_TYPE, content_type.clone());
    }
    for raw in upstream.get_all(SET_COOKIE) {
        let Ok(text) = raw.to_str() else {
            tracing::warn!("dropping non-ascii set-cookie from upstream");
            continue;
        };
        match HeaderValue::from_str(&rewrite_set_cookie(text)) {
            Ok(value) => {
                out.append(SET_COOKIE, value);
            }
            Err(e) => tracing::warn!(error = %e, "dropping unrewritable set-cookie"),
        }
    }
    out
}

// =============================================================================
// HANDLER
// =============================================================================

/// `ANY /api/{*path}`: replay the request against `ERAPOR_API_URL`.
///
/// # Errors
///
/// Returns [`ProxyError`] when the upstream cannot be reached or its body
/// cannot be read.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.config.api_url, uri.path(), uri.query());

    let mut request = state.http.request(method.clone(), &url);
    for name in &FORWARDED_REQUEST_HEADERS {
        for value in headers.get_all(name) {
            request = request.header(name.clone(), value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    let out_headers = response_headers(upstream.headers());
    let bytes = upstream.bytes().await?;

    tracing::debug!(%method, path = uri.path(), status = status.as_u16(), "proxied api request");
    Ok((status, out_headers, bytes).into_response())
}
