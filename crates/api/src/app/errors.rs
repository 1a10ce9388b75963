use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use aquawash_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::UnknownVehicle(id) => json_error(
            StatusCode::BAD_REQUEST,
            "unknown_vehicle",
            format!("unknown vehicle type '{id}' (expected one of: bike, car, gli, xli, carry)"),
        ),
        DomainError::UnknownService(id) => json_error(
            StatusCode::BAD_REQUEST,
            "unknown_service",
            format!(
                "unknown service '{id}' (expected one of: external, internal_external, diesel, polish)"
            ),
        ),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
