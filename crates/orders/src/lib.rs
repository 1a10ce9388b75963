//! Order working state.
//!
//! The services chosen for the order in progress, priced against the active
//! vehicle, and their running total. Deterministic domain logic only.

pub mod selection;

pub use selection::{SelectedService, Selection, Toggle, total};
