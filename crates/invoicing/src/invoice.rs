use chrono::{DateTime, Utc};
use serde::Serialize;

use aquawash_catalog::VehicleType;
use aquawash_core::ValueObject;
use aquawash_orders::{SelectedService, Selection, total};

/// Immutable record of a completed selection.
///
/// Services are copied out of the selection, so later toggles on the working
/// order never reach an issued invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    vehicle: String,
    services: Vec<SelectedService>,
    total: u64,
    issued_at: DateTime<Utc>,
}

impl ValueObject for Invoice {}

impl Invoice {
    /// Vehicle display name (empty when no vehicle was active).
    pub fn vehicle(&self) -> &str {
        &self.vehicle
    }

    pub fn services(&self) -> &[SelectedService] {
        &self.services
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

/// Snapshot the selection as an invoice issued at `issued_at`.
///
/// An empty selection is a valid invoice with a total of 0.
pub fn generate_invoice(
    vehicle: Option<VehicleType>,
    selection: &Selection,
    issued_at: DateTime<Utc>,
) -> Invoice {
    let services = selection.services().to_vec();
    Invoice {
        vehicle: vehicle.map(VehicleType::display_name).unwrap_or_default().to_string(),
        total: total(&services),
        services,
        issued_at,
    }
}
