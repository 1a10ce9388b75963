use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use aquawash_catalog::{ServiceKind, VehicleType};
use aquawash_core::DomainError;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(get_order))
        .route("/vehicle", post(select_vehicle))
        .route("/services", get(list_service_quotes))
        .route("/services/:service/toggle", post(toggle_service))
        .route("/invoice", post(generate_invoice))
        .route("/new", post(start_new_order))
}

pub async fn get_order(Extension(services): Extension<Arc<AppServices>>) -> Json<dto::OrderView> {
    let view = dto::OrderView::from_engine(&services.engine());
    Json(view)
}

pub async fn select_vehicle(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::SelectVehicleRequest>,
) -> axum::response::Response {
    let vehicle = match body.vehicle.parse::<VehicleType>() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let mut engine = services.engine();
    engine.select_vehicle(vehicle);
    Json(dto::OrderView::from_engine(&engine)).into_response()
}

pub async fn list_service_quotes(
    Extension(services): Extension<Arc<AppServices>>,
) -> Json<Vec<aquawash_engine::ServiceQuote>> {
    let quotes = services.engine().service_quotes();
    Json(quotes)
}

pub async fn toggle_service(
    Extension(services): Extension<Arc<AppServices>>,
    Path(service): Path<String>,
) -> axum::response::Response {
    let service = match service.parse::<ServiceKind>() {
        Ok(s) => s,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let mut engine = services.engine();
    // Services are only offered once a vehicle is chosen.
    if engine.active_vehicle().is_none() {
        return errors::domain_error_to_response(DomainError::conflict(
            "select a vehicle before choosing services",
        ));
    }

    let outcome = engine.toggle_service(service);
    Json(dto::ToggleResponse {
        outcome,
        order: dto::OrderView::from_engine(&engine),
    })
    .into_response()
}

pub async fn generate_invoice(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let mut engine = services.engine();
    let invoice = engine.generate_invoice().clone();
    (StatusCode::CREATED, Json(invoice)).into_response()
}

pub async fn start_new_order(
    Extension(services): Extension<Arc<AppServices>>,
) -> Json<dto::OrderView> {
    let mut engine = services.engine();
    engine.start_new_order();
    Json(dto::OrderView::from_engine(&engine))
}
