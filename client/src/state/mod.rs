//! Reactive state models shared across pages and components.
//!
//! DESIGN
//! ======
//! State structs are plain data wrapped in `RwSignal` contexts by `app::App`,
//! so transitions stay unit-testable without a reactive runtime.

pub mod auth;
pub mod trip;
