use axum::Router;

use crate::state::SharedState;

/// Swagger UI and OpenAPI document routes.
pub mod docs;
/// Game resource routes.
pub mod game;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = game::router(state.clone());
    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
