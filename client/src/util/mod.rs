//! Shared utility helpers used across client pages and components.
//!
//! DESIGN
//! ======
//! Utilities stay small and pure where possible so behavior is testable
//! without a browser runtime.

pub mod auth;
