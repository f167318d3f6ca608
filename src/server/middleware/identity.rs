//! Identity of the requesting account.
//!
//! Authentication happens in the reverse proxy in front of the server, which forwards
//! the signed-in username in a trusted header. The header name is configurable through
//! `AUTH_USER_HEADER`.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};

use crate::server::state::AppState;

/// Username forwarded by the proxy, `None` when the header is absent or blank.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteUser(pub Option<String>);

impl RemoteUser {
    pub fn username(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl FromRequestParts<AppState> for RemoteUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(username_from_headers(&parts.headers, &state.user_header)))
    }
}

fn username_from_headers(headers: &HeaderMap, header: &str) -> Option<String> {
    headers
        .get(header)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
