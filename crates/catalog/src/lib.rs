//! Wash catalog domain module.
//!
//! Vehicle types, the service catalog, the vehicle multiplier rule and the
//! editable base-price table. Pure, deterministic domain logic (no IO, no
//! HTTP, no storage).

pub mod pricing;
pub mod service;
pub mod vehicle;

pub use pricing::{Multiplier, PriceInput, PriceTable, coerce_price, price_multiplier, service_price};
pub use service::{ServiceCatalogEntry, ServiceKind};
pub use vehicle::VehicleType;
