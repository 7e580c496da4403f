//! HTTP API for the calculator service
//!
//! REST endpoints, request/response models, extractors, and route
//! definitions.

pub mod extract;
pub mod handlers;
pub mod models;
pub mod routes;
