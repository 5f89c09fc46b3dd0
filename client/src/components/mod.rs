//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the map and place listings from props; pages own the
//! shared state and fetch logic.

pub mod place_list;
pub mod place_popup;
pub mod trip_map;
