use std::sync::Arc;

use axum::{Json, Router, extract::Extension, routing::get};

use aquawash_catalog::{ServiceCatalogEntry, ServiceKind};
use aquawash_engine::VehicleQuote;

use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/vehicles", get(list_vehicles))
        .route("/services", get(list_services))
}

pub async fn list_vehicles(
    Extension(services): Extension<Arc<AppServices>>,
) -> Json<Vec<VehicleQuote>> {
    let quotes = services.engine().vehicle_quotes();
    Json(quotes)
}

pub async fn list_services() -> Json<[ServiceCatalogEntry; 4]> {
    Json(ServiceKind::catalog())
}
