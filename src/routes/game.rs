use axum::{
    Extension, Json, Router,
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use validator::Validate;

use crate::{
    dao::models::GameEntity,
    dto::{
        AppJson,
        game::{CreateGameRequest, GameResponse, MessageResponse, UpdateGameRequest},
    },
    error::{AppError, ServiceError},
    services::game_service,
    state::SharedState,
};

/// Routes exposing the game resource.
///
/// Id-scoped routes share the resolver middleware so the "validate id, load
/// or 404" step lives in one place.
pub fn router(state: SharedState) -> Router<SharedState> {
    let id_scoped = Router::new()
        .route(
            "/games/{id}",
            get(get_game).patch(update_game).delete(delete_game),
        )
        .route_layer(middleware::from_fn_with_state(state, resolve_game));

    Router::new()
        .route("/games", get(list_games).post(create_game))
        .merge(id_scoped)
}

/// Request list of all games.
#[utoipa::path(
    get,
    path = "/games",
    tag = "games",
    responses(
        (status = 200, description = "List of all games", body = [GameResponse]),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn list_games(
    State(state): State<SharedState>,
) -> Result<Json<Vec<GameResponse>>, AppError> {
    Ok(Json(game_service::list_games(&state).await?))
}

/// Get the game by id.
#[utoipa::path(
    get,
    path = "/games/{id}",
    tag = "games",
    params(("id" = String, Path, description = "The game id")),
    responses(
        (status = 200, description = "The requested game", body = GameResponse),
        (status = 404, description = "The game was not found", body = MessageResponse)
    )
)]
pub async fn get_game(Extension(game): Extension<GameEntity>) -> Json<GameResponse> {
    Json(game.into())
}

/// Create a new game.
#[utoipa::path(
    post,
    path = "/games",
    tag = "games",
    request_body = CreateGameRequest,
    responses(
        (status = 201, description = "Game was created", body = GameResponse),
        (status = 400, description = "Invalid payload", body = MessageResponse)
    )
)]
pub async fn create_game(
    State(state): State<SharedState>,
    AppJson(payload): AppJson<CreateGameRequest>,
) -> Result<(StatusCode, Json<GameResponse>), AppError> {
    payload.validate()?;
    let game = game_service::create_game(&state, payload)
        .await
        .map_err(write_error)?;
    Ok((StatusCode::CREATED, Json(game)))
}

/// Update game by id. Only the provided fields are overwritten.
#[utoipa::path(
    patch,
    path = "/games/{id}",
    tag = "games",
    params(("id" = String, Path, description = "The game id")),
    request_body = UpdateGameRequest,
    responses(
        (status = 200, description = "Game was updated", body = GameResponse),
        (status = 400, description = "Invalid payload", body = MessageResponse),
        (status = 404, description = "The game was not found", body = MessageResponse)
    )
)]
pub async fn update_game(
    State(state): State<SharedState>,
    Extension(game): Extension<GameEntity>,
    AppJson(payload): AppJson<UpdateGameRequest>,
) -> Result<Json<GameResponse>, AppError> {
    payload.validate()?;
    let updated = game_service::update_game(&state, game, payload)
        .await
        .map_err(write_error)?;
    Ok(Json(updated))
}

/// Delete the game by id.
#[utoipa::path(
    delete,
    path = "/games/{id}",
    tag = "games",
    params(("id" = String, Path, description = "The game id")),
    responses(
        (status = 200, description = "Game deleted", body = MessageResponse),
        (status = 404, description = "The game was not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn delete_game(
    State(state): State<SharedState>,
    Extension(game): Extension<GameEntity>,
) -> Result<Json<MessageResponse>, AppError> {
    game_service::delete_game(&state, game).await?;
    Ok(Json(MessageResponse {
        message: "Game deleted".to_owned(),
    }))
}

/// Shared lookup for id-scoped routes: resolve `{id}` and stash the entity in
/// request extensions for the handler.
async fn resolve_game(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let game = game_service::resolve_game(&state, &id).await?;
    request.extensions_mut().insert(game);
    Ok(next.run(request).await)
}

/// The write contract reports any persistence failure as a 400, matching the
/// create/update failure column of the API table.
fn write_error(err: ServiceError) -> AppError {
    match err {
        ServiceError::Storage(source) => AppError::BadRequest(source.to_string()),
        other => other.into(),
    }
}
