use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dao::models::{GameEntity, NewGame};

/// Payload accepted when creating a game. All three fields are required;
/// unknown fields are rejected.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateGameRequest {
    /// Name of the game.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Price of the game, kept as text (no numeric validation).
    #[validate(length(min = 1, message = "price must not be empty"))]
    pub price: String,
    /// Genre of the game.
    #[validate(length(min = 1, message = "genre must not be empty"))]
    pub genre: String,
}

impl From<CreateGameRequest> for NewGame {
    fn from(value: CreateGameRequest) -> Self {
        Self {
            name: value.name,
            price: value.price,
            genre: value.genre,
        }
    }
}

/// Partial update payload. Absent or `null` fields keep their stored value;
/// unknown fields are rejected.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct UpdateGameRequest {
    /// Replacement name, when provided.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    /// Replacement price, when provided.
    #[validate(length(min = 1, message = "price must not be empty"))]
    pub price: Option<String>,
    /// Replacement genre, when provided.
    #[validate(length(min = 1, message = "genre must not be empty"))]
    pub genre: Option<String>,
}

/// A game as returned to API clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct GameResponse {
    /// Auto generated id.
    pub id: String,
    /// Name of the game.
    pub name: String,
    /// Price of the game.
    pub price: String,
    /// Genre of the game.
    pub genre: String,
}

impl From<GameEntity> for GameResponse {
    fn from(value: GameEntity) -> Self {
        Self {
            id: value.id.to_hex(),
            name: value.name,
            price: value.price,
            genre: value.genre,
        }
    }
}

/// Uniform `{"message": …}` body used for deletions and error responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable outcome description.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_rejects_unknown_field() {
        let raw = r#"{"name":"Gothic III","price":"89.99","genre":"RPG","rating":"18"}"#;
        assert!(serde_json::from_str::<CreateGameRequest>(raw).is_err());
    }

    #[test]
    fn test_create_request_requires_all_fields() {
        let raw = r#"{"name":"Gothic III","price":"89.99"}"#;
        assert!(serde_json::from_str::<CreateGameRequest>(raw).is_err());
    }

    #[test]
    fn test_create_request_rejects_empty_name() {
        let raw = r#"{"name":"","price":"89.99","genre":"RPG"}"#;
        let request: CreateGameRequest = serde_json::from_str(raw).expect("deserialize");
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_request_null_and_absent_mean_unchanged() {
        let request: UpdateGameRequest =
            serde_json::from_str(r#"{"name":null,"price":"19.99"}"#).expect("deserialize");
        assert!(request.name.is_none());
        assert_eq!(request.price.as_deref(), Some("19.99"));
        assert!(request.genre.is_none());
    }

    #[test]
    fn test_update_request_rejects_mistyped_field() {
        assert!(serde_json::from_str::<UpdateGameRequest>(r#"{"price":19.99}"#).is_err());
    }
}
