//! `aquawash-auth`: admin gate for the price panel.
//!
//! The credential check is a literal comparison against configured values; it
//! gates the price editor and is not a security boundary. A successful login
//! is carried as a short-lived HS256 bearer token.
//!
//! This crate is decoupled from HTTP and storage.

pub mod claims;
pub mod credentials;
pub mod token;

pub use claims::{AdminClaims, TokenValidationError, validate_claims};
pub use credentials::{AuthError, Credentials, authenticate};
pub use token::{Hs256Tokens, IssuedToken, TokenError, TokenValidator};
