//! In-memory `IdentityProvider` for service and route tests.

use std::sync::Mutex;

use super::identity::{IdentityError, IdentityProvider, IdentityUser, ProfileUpdate, Session, AuthResponse};

pub const GOOD_TOKEN: &str = "at-good";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SignUp(String),
    SignIn(String),
    SignOut(String),
    GetUser(String),
    UpdateProfile { token: Option<String>, user_id: String, profile: ProfileUpdate },
}

pub struct MockIdentity {
    pub calls: Mutex<Vec<Call>>,
    /// Sign-up returns a session (auto-confirm) when true, a bare user otherwise.
    pub autoconfirm: bool,
    pub fail_with: Option<IdentityError>,
    pub fail_profile: Option<IdentityError>,
}

impl Default for MockIdentity {
    fn default() -> Self {
        Self { calls: Mutex::new(Vec::new()), autoconfirm: true, fail_with: None, fail_profile: None }
    }
}

impl MockIdentity {
    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            fail_with: Some(IdentityError::Provider { status, message: message.to_owned() }),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), IdentityError> {
        self.calls.lock().unwrap().push(call);
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

pub fn user(email: &str) -> IdentityUser {
    IdentityUser { id: format!("id-{email}"), email: Some(email.to_owned()), created_at: None }
}

pub fn session(email: &str) -> Session {
    Session {
        access_token: GOOD_TOKEN.to_owned(),
        refresh_token: "rt".to_owned(),
        expires_in: 3600,
        token_type: "bearer".to_owned(),
        user: user(email),
    }
}

#[async_trait::async_trait]
impl IdentityProvider for MockIdentity {
    async fn sign_up(&self, email: &str, _password: &str) -> Result<AuthResponse, IdentityError> {
        self.record(Call::SignUp(email.to_owned()))?;
        if self.autoconfirm {
            Ok(AuthResponse { user: Some(user(email)), session: Some(session(email)) })
        } else {
            Ok(AuthResponse { user: Some(user(email)), session: None })
        }
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<Session, IdentityError> {
        self.record(Call::SignIn(email.to_owned()))?;
        Ok(session(email))
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityError> {
        self.record(Call::SignOut(access_token.to_owned()))
    }

    async fn get_user(&self, access_token: &str) -> Result<IdentityUser, IdentityError> {
        self.record(Call::GetUser(access_token.to_owned()))?;
        if access_token == GOOD_TOKEN {
            Ok(user("asha@example.com"))
        } else {
            Err(IdentityError::Provider { status: 401, message: "invalid JWT".to_owned() })
        }
    }

    async fn update_profile(
        &self,
        access_token: Option<&str>,
        user_id: &str,
        profile: &ProfileUpdate,
    ) -> Result<(), IdentityError> {
        self.record(Call::UpdateProfile {
            token: access_token.map(str::to_owned),
            user_id: user_id.to_owned(),
            profile: profile.clone(),
        })?;
        match &self.fail_profile {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
