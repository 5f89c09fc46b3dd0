//! Auth-state change subscription.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages react to sign-in / sign-out without polling: the watcher fires the
//! callback once per `AuthState::generation` bump, with the session as it
//! stands after the change.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::net::types::Session;
use crate::state::auth::{AuthChange, AuthState};

/// The change a watcher that last saw `seen` should be told about, if any.
pub fn pending_change(state: &AuthState, seen: u64) -> Option<AuthChange> {
    if state.generation > seen { state.last_change } else { None }
}

/// Whether the auth page should send the user on to the trip page.
pub fn should_leave_auth_page(state: &AuthState) -> bool {
    !state.loading && state.is_signed_in()
}

/// Handle returned by [`on_auth_state_change`]; the watcher stays live until
/// `unsubscribe` is called or the owning scope is disposed.
#[derive(Clone, Debug)]
pub struct AuthSubscription {
    active: Arc<AtomicBool>,
}

impl AuthSubscription {
    pub fn unsubscribe(&self) {
        self.active.store(false, Ordering::Relaxed);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }
}

/// Invoke `callback(change, session)` for every auth-state change after
/// this call. Changes made before subscribing are not replayed.
pub fn on_auth_state_change<F>(auth: RwSignal<AuthState>, callback: F) -> AuthSubscription
where
    F: Fn(AuthChange, Option<Session>) + 'static,
{
    let subscription = AuthSubscription { active: Arc::new(AtomicBool::new(true)) };
    let watcher = subscription.clone();
    let seen = StoredValue::new(auth.get_untracked().generation);

    Effect::new(move || {
        let state = auth.get();
        if !watcher.is_active() {
            return;
        }
        if let Some(change) = pending_change(&state, seen.get_value()) {
            seen.set_value(state.generation);
            callback(change, state.session.clone());
        }
    });

    subscription
}
