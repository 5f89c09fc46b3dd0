//! Auth routes: thin pass-through to the hosted identity provider.
//!
//! The browser keeps the returned session in memory and sends its access
//! token back as `Authorization: Bearer <token>`. No cookies are set.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use axum::extract::{FromRequestParts, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use serde::Deserialize;

use crate::services::auth::AuthService;
use crate::services::identity::{AuthResponse, IdentityError, ProfileUpdate};
use crate::state::AppState;

// =============================================================================
// EXTRACTOR
// =============================================================================

/// Access token from the `Authorization: Bearer` header.
/// A missing or malformed header rejects with 401.
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| error_response(StatusCode::UNAUTHORIZED, "missing bearer token"))?;
        let token = bearer.token().trim();
        if token.is_empty() {
            return Err(error_response(StatusCode::UNAUTHORIZED, "missing bearer token"));
        }
        Ok(Self(token.to_owned()))
    }
}

// =============================================================================
// REQUEST BODIES
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(flatten)]
    pub profile: ProfileUpdate,
}

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/signup`: create an account (and fill its profile).
pub async fn sign_up(State(state): State<AppState>, Json(body): Json<SignUpRequest>) -> Response {
    let auth = match auth_service(&state) {
        Ok(auth) => auth,
        Err(resp) => return resp,
    };
    if let Some(resp) = require_credentials(&body.email, &body.password) {
        return resp;
    }
    match auth.sign_up(body.email.trim(), &body.password, &body.profile).await {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(e) => identity_error_response(&e),
    }
}

/// `POST /api/auth/signin`: email + password sign-in.
pub async fn sign_in(State(state): State<AppState>, Json(body): Json<SignInRequest>) -> Response {
    let auth = match auth_service(&state) {
        Ok(auth) => auth,
        Err(resp) => return resp,
    };
    if let Some(resp) = require_credentials(&body.email, &body.password) {
        return resp;
    }
    match auth.sign_in(body.email.trim(), &body.password).await {
        Ok(session) => Json(AuthResponse::from_session(session)).into_response(),
        Err(e) => identity_error_response(&e),
    }
}

/// `POST /api/auth/signout`: revoke the caller's session.
pub async fn sign_out(State(state): State<AppState>, BearerToken(token): BearerToken) -> Response {
    let auth = match auth_service(&state) {
        Ok(auth) => auth,
        Err(resp) => return resp,
    };
    match auth.sign_out(&token).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => identity_error_response(&e),
    }
}

/// `GET /api/auth/me`: the user behind the bearer token.
pub async fn me(State(state): State<AppState>, BearerToken(token): BearerToken) -> Response {
    let auth = match auth_service(&state) {
        Ok(auth) => auth,
        Err(resp) => return resp,
    };
    match auth.current_user(&token).await {
        Ok(user) => Json(user).into_response(),
        Err(e) => identity_error_response(&e),
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn auth_service(state: &AppState) -> Result<Arc<AuthService>, Response> {
    state
        .auth
        .clone()
        .ok_or_else(|| error_response(StatusCode::SERVICE_UNAVAILABLE, "authentication is not configured"))
}

fn require_credentials(email: &str, password: &str) -> Option<Response> {
    (email.trim().is_empty() || password.is_empty())
        .then(|| error_response(StatusCode::BAD_REQUEST, "email and password are required"))
}

pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

/// Provider rejections keep their status; transport and parse failures
/// become 502.
pub(crate) fn identity_status(err: &IdentityError) -> StatusCode {
    match err {
        IdentityError::Provider { status, .. } => StatusCode::from_u16(*status)
            .ok()
            .filter(|s| s.is_client_error() || s.is_server_error())
            .unwrap_or(StatusCode::BAD_GATEWAY),
        IdentityError::Request(_) | IdentityError::Parse(_) => StatusCode::BAD_GATEWAY,
        IdentityError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn identity_error_response(err: &IdentityError) -> Response {
    let status = identity_status(err);
    if status.is_server_error() {
        tracing::error!(error = %err, %status, "identity provider call failed");
    } else {
        tracing::warn!(error = %err, %status, "identity provider rejected request");
    }
    error_response(status, &err.to_string())
}
