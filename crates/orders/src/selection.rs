use serde::{Deserialize, Serialize};

use aquawash_catalog::{Multiplier, ServiceCatalogEntry, ServiceKind, VehicleType};
use aquawash_core::ValueObject;

/// A catalog service as priced for the order's vehicle.
///
/// The price is derived when the service is selected and never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedService {
    pub id: ServiceKind,
    pub name: String,
    pub price: u64,
}

impl ValueObject for SelectedService {}

impl SelectedService {
    /// Price `entry` for the active vehicle (1.0 when none is active).
    pub fn priced(entry: &ServiceCatalogEntry, vehicle: Option<VehicleType>) -> Self {
        Self {
            id: entry.kind,
            name: entry.name.to_string(),
            price: Multiplier::for_vehicle(vehicle).apply(entry.base_price),
        }
    }
}

/// Outcome of toggling a service.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
    Added,
    Removed,
}

/// Services chosen for the current order.
///
/// Iterates in selection order; each service appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    services: Vec<SelectedService>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the service if it is selected, otherwise price and append it.
    pub fn toggle(&mut self, entry: &ServiceCatalogEntry, vehicle: Option<VehicleType>) -> Toggle {
        if let Some(pos) = self.position(entry.kind) {
            self.services.remove(pos);
            Toggle::Removed
        } else {
            self.services.push(SelectedService::priced(entry, vehicle));
            Toggle::Added
        }
    }

    pub fn contains(&self, kind: ServiceKind) -> bool {
        self.position(kind).is_some()
    }

    pub fn get(&self, kind: ServiceKind) -> Option<&SelectedService> {
        self.services.iter().find(|s| s.id == kind)
    }

    pub fn services(&self) -> &[SelectedService] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn clear(&mut self) {
        self.services.clear();
    }

    pub fn total(&self) -> u64 {
        total(&self.services)
    }

    fn position(&self, kind: ServiceKind) -> Option<usize> {
        self.services.iter().position(|s| s.id == kind)
    }
}

/// Sum of the services' prices; 0 when empty.
pub fn total(services: &[SelectedService]) -> u64 {
    services.iter().map(|s| s.price).sum()
}
