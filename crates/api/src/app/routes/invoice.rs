use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::header,
    response::IntoResponse,
    routing::get,
};

use aquawash_core::DomainError;
use aquawash_invoicing::{Invoice, receipt_text, share_message, share_url};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(get_invoice))
        .route("/receipt", get(get_receipt))
        .route("/share", get(get_share))
}

fn current_invoice(services: &AppServices) -> Result<Invoice, axum::response::Response> {
    services
        .engine()
        .current_invoice()
        .cloned()
        .ok_or_else(|| errors::domain_error_to_response(DomainError::not_found()))
}

pub async fn get_invoice(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match current_invoice(&services) {
        Ok(invoice) => Json(invoice).into_response(),
        Err(resp) => resp,
    }
}

pub async fn get_receipt(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let invoice = match current_invoice(&services) {
        Ok(i) => i,
        Err(resp) => return resp,
    };
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        receipt_text(&invoice, &services.share),
    )
        .into_response()
}

pub async fn get_share(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let invoice = match current_invoice(&services) {
        Ok(i) => i,
        Err(resp) => return resp,
    };
    let url = match share_url(&invoice, &services.share) {
        Ok(u) => u,
        Err(e) => return errors::domain_error_to_response(e),
    };
    tracing::info!(total = invoice.total(), "invoice shared");
    Json(dto::ShareResponse {
        message: share_message(&invoice, &services.share),
        url: url.into(),
    })
    .into_response()
}
