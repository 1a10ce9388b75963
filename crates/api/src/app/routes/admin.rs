use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    routing::{get, post},
};

use aquawash_catalog::PriceTable;

use crate::app::dto;
use crate::app::services::AppServices;
use crate::context::AdminContext;

/// Admin-only endpoints. The caller layers the auth middleware on top.
pub fn router() -> Router {
    Router::new()
        .route("/prices", get(get_prices).put(update_prices))
        .route("/logout", post(logout))
}

pub async fn get_prices(Extension(services): Extension<Arc<AppServices>>) -> Json<PriceTable> {
    let table = *services.engine().price_table();
    Json(table)
}

pub async fn update_prices(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(admin): Extension<AdminContext>,
    Json(body): Json<dto::UpdatePricesRequest>,
) -> Json<PriceTable> {
    let table = body.into_table();
    services.engine().update_price_table(table);
    tracing::info!(admin = admin.username(), "prices saved");
    Json(table)
}

/// Tokens are stateless; the client discards its copy.
pub async fn logout(Extension(admin): Extension<AdminContext>) -> StatusCode {
    tracing::info!(admin = admin.username(), "admin logged out");
    StatusCode::NO_CONTENT
}
