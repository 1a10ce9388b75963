//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The pricing and order operations themselves are total; these variants cover
/// the edges where untyped input (path segments, request bodies) is turned into
/// the closed vehicle/service sets, plus the few states the HTTP surface refuses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The identifier does not name one of the known vehicle types.
    #[error("unknown vehicle type: {0}")]
    UnknownVehicle(String),

    /// The identifier does not name one of the catalog services.
    #[error("unknown service: {0}")]
    UnknownService(String),

    /// A requested resource was not found (domain-level).
    #[error("not found")]
    NotFound,

    /// The operation does not fit the current order state.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unknown_vehicle(id: impl Into<String>) -> Self {
        Self::UnknownVehicle(id.into())
    }

    pub fn unknown_service(id: impl Into<String>) -> Self {
        Self::UnknownService(id.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_identifier() {
        assert_eq!(
            DomainError::unknown_vehicle("truck").to_string(),
            "unknown vehicle type: truck"
        );
        assert_eq!(
            DomainError::unknown_service("vacuum").to_string(),
            "unknown service: vacuum"
        );
        assert_eq!(DomainError::not_found().to_string(), "not found");
    }
}
