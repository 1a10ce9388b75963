//! `aquawash-engine`: the order engine session.
//!
//! One [`OrderEngine`] owns the price table, the order in progress and the
//! last issued invoice. Callers (the HTTP layer) hold it explicitly; there is
//! no process-wide state.

pub mod engine;

pub use engine::{OrderEngine, ServiceQuote, VehicleQuote};
