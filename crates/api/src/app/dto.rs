use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use aquawash_catalog::{PriceInput, PriceTable, VehicleType};
use aquawash_engine::OrderEngine;
use aquawash_orders::{SelectedService, Toggle};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct SelectVehicleRequest {
    pub vehicle: String,
}

/// Price editor submission. All five vehicles must be present.
#[derive(Debug, Deserialize)]
pub struct UpdatePricesRequest {
    pub bike: PriceInput,
    pub car: PriceInput,
    pub gli: PriceInput,
    pub xli: PriceInput,
    pub carry: PriceInput,
}

impl UpdatePricesRequest {
    pub fn into_table(self) -> PriceTable {
        PriceTable::from_fn(|vehicle| {
            match vehicle {
                VehicleType::Bike => &self.bike,
                VehicleType::Car => &self.car,
                VehicleType::Gli => &self.gli,
                VehicleType::Xli => &self.xli,
                VehicleType::Carry => &self.carry,
            }
            .coerce()
        })
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ActiveVehicle {
    pub id: VehicleType,
    pub name: &'static str,
}

/// The order in progress.
#[derive(Debug, Serialize)]
pub struct OrderView {
    pub vehicle: Option<ActiveVehicle>,
    pub services: Vec<SelectedService>,
    pub total: u64,
}

impl OrderView {
    pub fn from_engine(engine: &OrderEngine) -> Self {
        Self {
            vehicle: engine.active_vehicle().map(|id| ActiveVehicle {
                id,
                name: id.display_name(),
            }),
            services: engine.selection().services().to_vec(),
            total: engine.total(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub outcome: Toggle,
    #[serde(flatten)]
    pub order: OrderView,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub message: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquawash_catalog::ServiceKind;

    #[test]
    fn price_update_mixes_numbers_and_text() {
        let body: UpdatePricesRequest = serde_json::from_str(
            r#"{"bike": "180", "car": 320, "gli": "12abc", "xli": -4, "carry": "n/a"}"#,
        )
        .unwrap();
        assert_eq!(
            body.into_table(),
            PriceTable {
                bike: 180,
                car: 320,
                gli: 12,
                xli: 0,
                carry: 0,
            }
        );
    }

    #[test]
    fn price_update_requires_every_vehicle() {
        let parsed =
            serde_json::from_str::<UpdatePricesRequest>(r#"{"bike": 1, "car": 2, "gli": 3, "xli": 4}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn order_view_reflects_engine() {
        let mut engine = OrderEngine::default();
        let empty = serde_json::to_value(OrderView::from_engine(&engine)).unwrap();
        assert_eq!(empty["vehicle"], serde_json::Value::Null);
        assert_eq!(empty["total"], 0);

        engine.select_vehicle(VehicleType::Bike);
        engine.toggle_service(ServiceKind::Polish);
        let view = serde_json::to_value(OrderView::from_engine(&engine)).unwrap();
        assert_eq!(view["vehicle"]["id"], "bike");
        assert_eq!(view["vehicle"]["name"], "Bike");
        assert_eq!(view["services"][0]["id"], "polish");
        assert_eq!(view["services"][0]["price"], 210);
        assert_eq!(view["total"], 210);
    }
}
