//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These mirror the server's JSON bodies so serde round-trips stay lossless.
//! Places use the shared `tripmap::place::Place` record directly.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use tripmap::geo::LatLng;

pub use tripmap::place::Place;

/// Account as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// Label for the header: the email, or the id when none is known.
    pub fn display_name(&self) -> &str {
        self.email.as_deref().unwrap_or(&self.id)
    }
}

/// Provider session. Kept in memory only; gone on reload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub token_type: String,
    pub user: User,
}

/// `{ user, session? }` from sign-up and sign-in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub session: Option<Session>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub full_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub date_of_birth: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Error body returned by every failing API route.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Supported city with its map center.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CitySummary {
    pub key: String,
    pub center: LatLng,
    #[serde(default)]
    pub places: usize,
}
