use axum::Router;

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod invoice;
pub mod order;
pub mod system;

/// Router for all public (counter) endpoints.
pub fn router() -> Router {
    Router::new()
        .merge(catalog::router())
        .nest("/order", order::router())
        .nest("/invoice", invoice::router())
        .nest("/auth", auth::router())
}
