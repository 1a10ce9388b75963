use chrono::{DateTime, Utc};
use serde::Serialize;

use aquawash_catalog::{Multiplier, PriceTable, ServiceKind, VehicleType};
use aquawash_invoicing::{Invoice, generate_invoice};
use aquawash_orders::{Selection, Toggle};

/// A vehicle as listed on the home view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleQuote {
    pub id: VehicleType,
    pub name: &'static str,
    pub base_price: u64,
}

/// A catalog service priced for the active vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceQuote {
    pub id: ServiceKind,
    pub name: &'static str,
    pub price: u64,
    pub selected: bool,
}

/// Counter session: price table, order in progress, last invoice.
#[derive(Debug, Clone, Default)]
pub struct OrderEngine {
    prices: PriceTable,
    vehicle: Option<VehicleType>,
    selection: Selection,
    invoice: Option<Invoice>,
}

impl OrderEngine {
    pub fn new(prices: PriceTable) -> Self {
        Self {
            prices,
            ..Self::default()
        }
    }

    pub fn price_table(&self) -> &PriceTable {
        &self.prices
    }

    pub fn active_vehicle(&self) -> Option<VehicleType> {
        self.vehicle
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn current_invoice(&self) -> Option<&Invoice> {
        self.invoice.as_ref()
    }

    /// Vehicles with their current base prices, in catalog order.
    pub fn vehicle_quotes(&self) -> Vec<VehicleQuote> {
        self.prices
            .entries()
            .into_iter()
            .map(|(id, base_price)| VehicleQuote {
                id,
                name: id.display_name(),
                base_price,
            })
            .collect()
    }

    /// Every catalog service priced for the active vehicle.
    pub fn service_quotes(&self) -> Vec<ServiceQuote> {
        let multiplier = Multiplier::for_vehicle(self.vehicle);
        ServiceKind::catalog()
            .into_iter()
            .map(|entry| ServiceQuote {
                id: entry.kind,
                name: entry.name,
                price: multiplier.apply(entry.base_price),
                selected: self.selection.contains(entry.kind),
            })
            .collect()
    }

    /// Make `vehicle` active and drop any services chosen so far.
    pub fn select_vehicle(&mut self, vehicle: VehicleType) {
        self.vehicle = Some(vehicle);
        self.selection.clear();
        tracing::info!(vehicle = %vehicle, "vehicle selected");
    }

    /// Add or remove `service`, priced for the active vehicle.
    pub fn toggle_service(&mut self, service: ServiceKind) -> Toggle {
        if self.vehicle.is_none() {
            tracing::warn!(service = %service, "service toggled with no vehicle; pricing at 1.0");
        }
        let outcome = self.selection.toggle(&service.entry(), self.vehicle);
        tracing::debug!(service = %service, ?outcome, total = self.selection.total(), "service toggled");
        outcome
    }

    pub fn is_selected(&self, service: ServiceKind) -> bool {
        self.selection.contains(service)
    }

    pub fn total(&self) -> u64 {
        self.selection.total()
    }

    /// Issue an invoice for the current selection, stamped now.
    pub fn generate_invoice(&mut self) -> &Invoice {
        self.generate_invoice_at(Utc::now())
    }

    /// Issue an invoice for the current selection, stamped `issued_at`.
    ///
    /// Every call issues a new invoice; the previous one is replaced.
    pub fn generate_invoice_at(&mut self, issued_at: DateTime<Utc>) -> &Invoice {
        let invoice = generate_invoice(self.vehicle, &self.selection, issued_at);
        tracing::info!(
            vehicle = invoice.vehicle(),
            lines = invoice.services().len(),
            total = invoice.total(),
            "invoice generated"
        );
        self.invoice.insert(invoice)
    }

    /// Clear vehicle, selection and invoice.
    pub fn start_new_order(&mut self) {
        self.vehicle = None;
        self.selection.clear();
        self.invoice = None;
        tracing::info!("new order started");
    }

    /// Replace every vehicle base price.
    ///
    /// Already-priced selections and issued invoices keep their amounts.
    pub fn update_price_table(&mut self, prices: PriceTable) {
        tracing::info!(?prices, "price table updated");
        self.prices = prices;
    }
}
