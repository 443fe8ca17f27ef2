//! Library crate for games-api, exposing modules for binaries and integration tests.

/// Environment-driven process configuration.
pub mod config;
/// Storage abstraction and the MongoDB backend.
pub mod dao;
/// Typed request/response schemas.
pub mod dto;
/// Error taxonomy and its HTTP mapping.
pub mod error;
/// HTTP route trees.
pub mod routes;
/// Game operations and OpenAPI document assembly.
pub mod services;
/// Shared application state.
pub mod state;
