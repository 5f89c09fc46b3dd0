//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session returned by sign-in/sign-up lives here and nowhere else: no
//! cookie, no local storage. A reload signs the user out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{AuthResponse, Session, User};

/// Kind of auth-state change observed by `util::auth::on_auth_state_change`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthChange {
    SignedIn,
    SignedOut,
    UserUpdated,
}

impl AuthChange {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SignedIn => "SIGNED_IN",
            Self::SignedOut => "SIGNED_OUT",
            Self::UserUpdated => "USER_UPDATED",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub user: Option<User>,
    /// A sign-in or sign-up request is in flight.
    pub loading: bool,
    /// One-shot message for the next page (e.g. "Welcome back!").
    pub notice: Option<String>,
    /// Bumped on every change; watchers compare against the value they saw.
    pub generation: u64,
    pub last_change: Option<AuthChange>,
}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.access_token.as_str())
    }

    fn record(&mut self, change: AuthChange) -> AuthChange {
        self.generation += 1;
        self.last_change = Some(change);
        change
    }

    pub fn begin_request(&mut self) {
        self.loading = true;
    }

    /// The in-flight request failed; the session is left as it was.
    pub fn request_failed(&mut self) {
        self.loading = false;
    }

    /// Adopt a sign-in/sign-up response. A response without a session
    /// (email confirmation pending) leaves the user signed out.
    pub fn apply_auth_response(&mut self, response: AuthResponse) -> Option<AuthChange> {
        self.loading = false;
        let session = response.session?;
        self.user = Some(session.user.clone());
        self.session = Some(session);
        Some(self.record(AuthChange::SignedIn))
    }

    /// Drop the in-memory session. No-op when already signed out.
    pub fn sign_out(&mut self) -> Option<AuthChange> {
        self.loading = false;
        self.user = None;
        self.session.take()?;
        Some(self.record(AuthChange::SignedOut))
    }

    /// Replace the cached user after a `/api/auth/me` refresh.
    pub fn user_updated(&mut self, user: User) -> Option<AuthChange> {
        if !self.is_signed_in() || self.user.as_ref() == Some(&user) {
            return None;
        }
        if let Some(session) = self.session.as_mut() {
            session.user = user.clone();
        }
        self.user = Some(user);
        Some(self.record(AuthChange::UserUpdated))
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}
