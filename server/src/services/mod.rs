//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own provider access and catalog data so route handlers
//! can stay focused on protocol translation and bearer-token plumbing.

pub mod auth;
pub mod identity;
#[cfg(test)]
pub mod identity_mock;
pub mod places;
