use mongodb::bson::oid::ObjectId;

use crate::{
    dao::models::GameEntity,
    dto::game::{CreateGameRequest, GameResponse, UpdateGameRequest},
    error::ServiceError,
    state::SharedState,
};

/// Message returned whenever an id-scoped route cannot produce a game.
const GAME_NOT_FOUND: &str = "Cannot find game";

/// Fetch every stored game.
pub async fn list_games(state: &SharedState) -> Result<Vec<GameResponse>, ServiceError> {
    let games = state.store().list_games().await?;
    Ok(games.into_iter().map(Into::into).collect())
}

/// Resolve a path-supplied id into the stored game it names.
///
/// A malformed id and an absent one are indistinguishable to clients: both
/// yield the same not-found outcome before any handler runs.
pub async fn resolve_game(state: &SharedState, id: &str) -> Result<GameEntity, ServiceError> {
    let Ok(object_id) = ObjectId::parse_str(id) else {
        return Err(ServiceError::NotFound(GAME_NOT_FOUND.into()));
    };

    let Some(game) = state.store().find_game(object_id).await? else {
        return Err(ServiceError::NotFound(GAME_NOT_FOUND.into()));
    };

    Ok(game)
}

/// Persist a new game built from the validated request payload.
pub async fn create_game(
    state: &SharedState,
    request: CreateGameRequest,
) -> Result<GameResponse, ServiceError> {
    let game = state.store().insert_game(request.into()).await?;
    Ok(game.into())
}

/// Overwrite the provided fields of an already-resolved game and persist it.
pub async fn update_game(
    state: &SharedState,
    mut game: GameEntity,
    request: UpdateGameRequest,
) -> Result<GameResponse, ServiceError> {
    let UpdateGameRequest { name, price, genre } = request;

    if let Some(name) = name {
        game.name = name;
    }
    if let Some(price) = price {
        game.price = price;
    }
    if let Some(genre) = genre {
        game.genre = genre;
    }

    state.store().update_game(game.clone()).await?;
    Ok(game.into())
}

/// Remove an already-resolved game from the store.
pub async fn delete_game(state: &SharedState, game: GameEntity) -> Result<(), ServiceError> {
    let deleted = state.store().delete_game(game.id).await?;
    if !deleted {
        // The game vanished between resolution and deletion.
        return Err(ServiceError::NotFound(GAME_NOT_FOUND.into()));
    }
    Ok(())
}
