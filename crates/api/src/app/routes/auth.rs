use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;

use aquawash_auth::{Credentials, authenticate};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/login", post(login))
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Credentials>,
) -> axum::response::Response {
    if let Err(e) = authenticate(&body, &services.admin) {
        return errors::json_error(StatusCode::UNAUTHORIZED, "invalid_credentials", e.to_string());
    }

    match services.tokens.issue(&body.username, Utc::now()) {
        Ok(issued) => Json(dto::LoginResponse {
            expires_at: issued.claims.expires_at(),
            token: issued.token,
        })
        .into_response(),
        Err(e) => {
            tracing::error!("failed to issue admin token: {e}");
            errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "could not issue token",
            )
        }
    }
}
