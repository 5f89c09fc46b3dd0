//! Auth service: sign-up/sign-in pass-through with auth-state broadcast.
//!
//! DESIGN
//! ======
//! All account logic lives in the identity provider. The service adds two
//! things on top: the post-sign-up `profiles` update and a broadcast of
//! auth-state changes. Provider failures are returned unchanged.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use tokio::sync::broadcast;

use super::identity::{AuthResponse, IdentityError, IdentityProvider, IdentityUser, ProfileUpdate, Session};

const EVENT_CAPACITY: usize = 64;

/// Auth-state change, delivered to every subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn { user_id: String, email: Option<String> },
    SignedOut,
    UserUpdated { user_id: String },
}

pub struct AuthService {
    provider: Arc<dyn IdentityProvider>,
    events: broadcast::Sender<AuthEvent>,
}

impl AuthService {
    #[must_use]
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self { provider, events }
    }

    /// Register for auth-state changes. Dropping the receiver unsubscribes.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }

    fn emit(&self, event: AuthEvent) {
        if self.events.send(event).is_err() {
            tracing::debug!("auth event dropped: no subscribers");
        }
    }

    /// Create an account, then fill in its `profiles` row when profile
    /// fields were supplied.
    ///
    /// # Errors
    ///
    /// Returns the provider's error from either the sign-up or the profile
    /// update.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        profile: &ProfileUpdate,
    ) -> Result<AuthResponse, IdentityError> {
        let outcome = self.provider.sign_up(email, password).await?;

        let mut profile_written = None;
        if let Some(user) = outcome.user.as_ref().filter(|_| !profile.is_empty()) {
            let token = outcome.session.as_ref().map(|s| s.access_token.as_str());
            self.provider.update_profile(token, &user.id, profile).await?;
            profile_written = Some(user.id.clone());
        }

        if let Some(session) = &outcome.session {
            self.emit(signed_in(session));
        }
        if let Some(user_id) = profile_written {
            self.emit(AuthEvent::UserUpdated { user_id });
        }
        tracing::info!(
            email,
            confirmed = outcome.session.is_some(),
            "account created"
        );
        Ok(outcome)
    }

    /// # Errors
    ///
    /// Returns the provider's error unchanged.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        let session = self.provider.sign_in(email, password).await?;
        self.emit(signed_in(&session));
        Ok(session)
    }

    /// # Errors
    ///
    /// Returns the provider's error unchanged.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError> {
        self.provider.sign_out(access_token).await?;
        self.emit(AuthEvent::SignedOut);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the provider's error unchanged (typically 401 for a stale token).
    pub async fn current_user(&self, access_token: &str) -> Result<IdentityUser, IdentityError> {
        self.provider.get_user(access_token).await
    }
}

fn signed_in(session: &Session) -> AuthEvent {
    AuthEvent::SignedIn { user_id: session.user.id.clone(), email: session.user.email.clone() }
}
