use super::*;
use crate::net::types::{AuthResponse, User};

fn signed_in_state() -> AuthState {
    let user = User { id: "u1".to_owned(), email: None, created_at: None };
    let session = Session {
        access_token: "at".to_owned(),
        refresh_token: String::new(),
        expires_in: 0,
        token_type: "bearer".to_owned(),
        user: user.clone(),
    };
    let mut state = AuthState::default();
    state.apply_auth_response(AuthResponse { user: Some(user), session: Some(session) });
    state
}

#[test]
fn pending_change_reports_newer_generation() {
    let state = signed_in_state();
    assert_eq!(pending_change(&state, 0), Some(AuthChange::SignedIn));
}

#[test]
fn pending_change_silent_when_already_seen() {
    let state = signed_in_state();
    assert_eq!(pending_change(&state, state.generation), None);
}

#[test]
fn pending_change_silent_on_fresh_state() {
    assert_eq!(pending_change(&AuthState::default(), 0), None);
}

#[test]
fn leave_auth_page_once_signed_in() {
    assert!(should_leave_auth_page(&signed_in_state()));
    assert!(!should_leave_auth_page(&AuthState::default()));
}

#[test]
fn stay_on_auth_page_while_loading() {
    let state = AuthState { loading: true, ..signed_in_state() };
    assert!(!should_leave_auth_page(&state));
}

#[test]
fn unsubscribe_deactivates_handle() {
    let sub = AuthSubscription { active: Arc::new(AtomicBool::new(true)) };
    let copy = sub.clone();
    assert!(copy.is_active());
    sub.unsubscribe();
    assert!(!copy.is_active());
}
