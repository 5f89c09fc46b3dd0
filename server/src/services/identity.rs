//! Hosted identity provider adapter (Supabase GoTrue + PostgREST).
//!
//! DESIGN
//! ======
//! The identity provider owns accounts, passwords and sessions. This module
//! only translates calls into HTTP requests and responses back into typed
//! values; it never retries and never reinterprets a provider failure.
//! Parsing is kept in pure functions for testability.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::SupabaseConfig;

// =============================================================================
// TYPES
// =============================================================================

/// Account as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Provider session. Held by the browser in memory only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub token_type: String,
    pub user: IdentityUser,
}

/// `{ user, session? }` as answered by sign-up and sign-in. `session` is
/// absent when the provider requires email confirmation first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: Option<IdentityUser>,
    pub session: Option<Session>,
}

/// Extra profile columns written to the `profiles` table after sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub phone: String,
    pub date_of_birth: String,
}

impl AuthResponse {
    #[must_use]
    pub fn from_session(session: Session) -> Self {
        Self { user: Some(session.user.clone()), session: Some(session) }
    }
}

impl ProfileUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full_name.is_empty() && self.phone.is_empty() && self.date_of_birth.is_empty()
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum IdentityError {
    /// The provider rejected the call; carries its status and message as-is.
    #[error("{message}")]
    Provider { status: u16, message: String },
    #[error("identity request failed: {0}")]
    Request(String),
    #[error("identity response parse failed: {0}")]
    Parse(String),
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// PROVIDER TRAIT
// =============================================================================

/// Operations consumed from the identity provider.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthResponse, IdentityError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError>;

    async fn get_user(&self, access_token: &str) -> Result<IdentityUser, IdentityError>;

    /// Without a session token the call is made with the anon key, the way a
    /// signed-out browser client would.
    async fn update_profile(
        &self,
        access_token: Option<&str>,
        user_id: &str,
        profile: &ProfileUpdate,
    ) -> Result<(), IdentityError>;
}

// =============================================================================
// SUPABASE CLIENT
// =============================================================================

pub struct SupabaseProvider {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseProvider {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &SupabaseConfig) -> Result<Self, IdentityError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| IdentityError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.url.clone(), anon_key: config.anon_key.clone() })
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<(u16, String), IdentityError> {
        let response = request
            .header("apikey", &self.anon_key)
            .send()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;
        if !(200..300).contains(&status) {
            return Err(provider_error(status, &body));
        }
        Ok((status, body))
    }
}

#[async_trait::async_trait]
impl IdentityProvider for SupabaseProvider {
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthResponse, IdentityError> {
        let request = self
            .http
            .post(self.url("/auth/v1/signup"))
            .json(&Credentials { email, password });
        let (_, body) = self.send(request).await?;
        parse_sign_up(&body)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        let request = self
            .http
            .post(self.url("/auth/v1/token"))
            .query(&[("grant_type", "password")])
            .json(&Credentials { email, password });
        let (_, body) = self.send(request).await?;
        parse_session(&body)
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError> {
        let request = self
            .http
            .post(self.url("/auth/v1/logout"))
            .bearer_auth(access_token);
        self.send(request).await?;
        Ok(())
    }

    async fn get_user(&self, access_token: &str) -> Result<IdentityUser, IdentityError> {
        let request = self
            .http
            .get(self.url("/auth/v1/user"))
            .bearer_auth(access_token);
        let (_, body) = self.send(request).await?;
        parse_user(&body)
    }

    async fn update_profile(
        &self,
        access_token: Option<&str>,
        user_id: &str,
        profile: &ProfileUpdate,
    ) -> Result<(), IdentityError> {
        let request = self
            .http
            .patch(self.url("/rest/v1/profiles"))
            .query(&[("id", profile_filter(user_id))])
            .bearer_auth(access_token.unwrap_or(&self.anon_key))
            .header("Prefer", "return=minimal")
            .json(profile);
        self.send(request).await?;
        Ok(())
    }
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

// =============================================================================
// PURE HELPERS
// =============================================================================

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

pub(crate) fn profile_filter(user_id: &str) -> String {
    format!("eq.{user_id}")
}

/// Pull the human-readable message out of a provider error body.
///
/// GoTrue uses `error_description`, `msg` or `message` depending on the
/// endpoint and version; PostgREST uses `message`.
pub(crate) fn provider_error(status: u16, body: &str) -> IdentityError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["error_description", "msg", "message", "error"]
                .iter()
                .find_map(|key| value.get(*key).and_then(serde_json::Value::as_str).map(str::to_owned))
        })
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() { format!("identity provider returned status {status}") } else { trimmed.to_owned() }
        });
    IdentityError::Provider { status, message }
}

pub(crate) fn parse_session(body: &str) -> Result<Session, IdentityError> {
    serde_json::from_str(body).map_err(|e| IdentityError::Parse(e.to_string()))
}

pub(crate) fn parse_user(body: &str) -> Result<IdentityUser, IdentityError> {
    serde_json::from_str(body).map_err(|e| IdentityError::Parse(e.to_string()))
}

/// Sign-up answers with a session when auto-confirm is on, a bare user when
/// email confirmation is pending.
pub(crate) fn parse_sign_up(body: &str) -> Result<AuthResponse, IdentityError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| IdentityError::Parse(e.to_string()))?;
    if value.get("access_token").is_some() {
        let session: Session = serde_json::from_value(value).map_err(|e| IdentityError::Parse(e.to_string()))?;
        return Ok(AuthResponse::from_session(session));
    }
    if let Some(user) = value.get("user").filter(|u| !u.is_null()) {
        let user: IdentityUser =
            serde_json::from_value(user.clone()).map_err(|e| IdentityError::Parse(e.to_string()))?;
        return Ok(AuthResponse { user: Some(user), session: None });
    }
    if value.get("id").is_some() {
        let user: IdentityUser = serde_json::from_value(value).map_err(|e| IdentityError::Parse(e.to_string()))?;
        return Ok(AuthResponse { user: Some(user), session: None });
    }
    Ok(AuthResponse::default())
}
