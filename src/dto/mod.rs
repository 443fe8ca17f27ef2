/// Schemas for the game resource.
pub mod game;

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON extractor whose rejection is rendered as an [`AppError`] so malformed
/// bodies keep the uniform `{"message": …}` shape.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
