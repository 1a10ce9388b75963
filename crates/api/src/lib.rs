//! HTTP API: configuration, routing, and request/response mapping for the
//! wash counter.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
