use super::test_helpers::{state_with, state_without_auth};
use crate::services::identity_mock::MockIdentity;

#[test]
fn auth_disabled_without_provider() {
    let state = state_without_auth();
    assert!(!state.auth_enabled());
    assert!(!state.places.is_empty());
}

#[test]
fn auth_enabled_with_provider() {
    let (_, state) = state_with(MockIdentity::default());
    assert!(state.auth_enabled());
}

#[test]
fn clones_share_the_catalog() {
    let state = state_without_auth();
    let copy = state.clone();
    assert!(std::sync::Arc::ptr_eq(&state.places, &copy.places));
}
