use super::*;

fn user(id: &str, email: &str) -> User {
    User { id: id.to_owned(), email: Some(email.to_owned()), created_at: None }
}

fn session_for(user: User) -> Session {
    Session {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        expires_in: 3600,
        token_type: "bearer".to_owned(),
        user,
    }
}

fn signed_in() -> AuthState {
    let mut state = AuthState::default();
    let u = user("u1", "asha@example.com");
    state.apply_auth_response(AuthResponse { user: Some(u.clone()), session: Some(session_for(u)) });
    state
}

#[test]
fn default_is_signed_out() {
    let state = AuthState::default();
    assert!(!state.is_signed_in());
    assert_eq!(state.access_token(), None);
    assert_eq!(state.generation, 0);
}

#[test]
fn response_with_session_signs_in() {
    let state = signed_in();
    assert!(state.is_signed_in());
    assert_eq!(state.access_token(), Some("at"));
    assert_eq!(state.user.as_ref().unwrap().id, "u1");
    assert_eq!(state.last_change, Some(AuthChange::SignedIn));
    assert_eq!(state.generation, 1);
}

#[test]
fn response_without_session_stays_signed_out() {
    let mut state = AuthState { loading: true, ..AuthState::default() };
    let change = state.apply_auth_response(AuthResponse { user: Some(user("u1", "a@b.c")), session: None });
    assert_eq!(change, None);
    assert!(!state.is_signed_in());
    assert!(!state.loading);
    assert_eq!(state.generation, 0);
}

#[test]
fn request_lifecycle_drives_loading() {
    let mut state = AuthState::default();
    state.begin_request();
    assert!(state.loading);
    state.request_failed();
    assert!(!state.loading);
    assert!(!state.is_signed_in());
    assert_eq!(state.generation, 0);
}

#[test]
fn successful_response_ends_loading() {
    let mut state = AuthState::default();
    state.begin_request();
    let u = user("u1", "asha@example.com");
    state.apply_auth_response(AuthResponse { user: Some(u.clone()), session: Some(session_for(u)) });
    assert!(!state.loading);
    assert!(state.is_signed_in());
}

#[test]
fn sign_out_clears_session_once() {
    let mut state = signed_in();
    assert_eq!(state.sign_out(), Some(AuthChange::SignedOut));
    assert!(state.user.is_none());
    assert_eq!(state.sign_out(), None);
    assert_eq!(state.generation, 2);
}

#[test]
fn user_updated_only_when_changed() {
    let mut state = signed_in();
    assert_eq!(state.user_updated(user("u1", "asha@example.com")), None);
    assert_eq!(state.user_updated(user("u1", "asha.rao@example.com")), Some(AuthChange::UserUpdated));
    assert_eq!(state.session.as_ref().unwrap().user.email.as_deref(), Some("asha.rao@example.com"));
}

#[test]
fn user_updated_ignored_when_signed_out() {
    let mut state = AuthState::default();
    assert_eq!(state.user_updated(user("u1", "a@b.c")), None);
    assert!(state.user.is_none());
}

#[test]
fn notice_is_taken_once() {
    let mut state = AuthState { notice: Some("Welcome back!".to_owned()), ..AuthState::default() };
    assert_eq!(state.take_notice().as_deref(), Some("Welcome back!"));
    assert_eq!(state.take_notice(), None);
}

#[test]
fn change_names_match_provider_events() {
    assert_eq!(AuthChange::SignedIn.as_str(), "SIGNED_IN");
    assert_eq!(AuthChange::SignedOut.as_str(), "SIGNED_OUT");
    assert_eq!(AuthChange::UserUpdated.as_str(), "USER_UPDATED");
}
