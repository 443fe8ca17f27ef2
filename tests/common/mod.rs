//! Shared helpers: request plumbing and trait-level store test doubles.

use std::{
    collections::HashMap,
    io,
    sync::{Arc, Mutex},
};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use futures::future::BoxFuture;
use http_body_util::BodyExt;
use mongodb::bson::oid::ObjectId;
use tower::ServiceExt;

use games_api::dao::{
    game_store::GameStore,
    models::{GameEntity, NewGame},
    storage::{StorageError, StorageResult},
};
use games_api::state::AppState;

/// In-memory [`GameStore`] backing router tests without a database.
#[derive(Clone, Default)]
pub struct MemoryGameStore {
    games: Arc<Mutex<HashMap<ObjectId, GameEntity>>>,
}

impl GameStore for MemoryGameStore {
    fn insert_game(&self, game: NewGame) -> BoxFuture<'static, StorageResult<GameEntity>> {
        let games = Arc::clone(&self.games);
        Box::pin(async move {
            let entity = GameEntity {
                id: ObjectId::new(),
                name: game.name,
                price: game.price,
                genre: game.genre,
            };
            games.lock().expect("lock").insert(entity.id, entity.clone());
            Ok(entity)
        })
    }

    fn find_game(&self, id: ObjectId) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let games = Arc::clone(&self.games);
        Box::pin(async move { Ok(games.lock().expect("lock").get(&id).cloned()) })
    }

    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let games = Arc::clone(&self.games);
        Box::pin(async move { Ok(games.lock().expect("lock").values().cloned().collect()) })
    }

    fn update_game(&self, game: GameEntity) -> BoxFuture<'static, StorageResult<()>> {
        let games = Arc::clone(&self.games);
        Box::pin(async move {
            games.lock().expect("lock").insert(game.id, game);
            Ok(())
        })
    }

    fn delete_game(&self, id: ObjectId) -> BoxFuture<'static, StorageResult<bool>> {
        let games = Arc::clone(&self.games);
        Box::pin(async move { Ok(games.lock().expect("lock").remove(&id).is_some()) })
    }
}

/// Store whose every operation fails, for exercising the storage-error paths.
#[derive(Clone, Default)]
pub struct FailingGameStore;

fn storage_failure() -> StorageError {
    StorageError::unavailable(
        "database connection lost".to_owned(),
        io::Error::other("connection reset"),
    )
}

impl GameStore for FailingGameStore {
    fn insert_game(&self, _game: NewGame) -> BoxFuture<'static, StorageResult<GameEntity>> {
        Box::pin(async move { Err(storage_failure()) })
    }

    fn find_game(&self, _id: ObjectId) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        Box::pin(async move { Err(storage_failure()) })
    }

    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        Box::pin(async move { Err(storage_failure()) })
    }

    fn update_game(&self, _game: GameEntity) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async move { Err(storage_failure()) })
    }

    fn delete_game(&self, _id: ObjectId) -> BoxFuture<'static, StorageResult<bool>> {
        Box::pin(async move { Err(storage_failure()) })
    }
}

/// Router wired to a fresh in-memory store.
pub fn test_app() -> Router {
    games_api::routes::router(AppState::new(Arc::new(MemoryGameStore::default())))
}

/// Router wired to a store that fails every operation.
pub fn failing_app() -> Router {
    games_api::routes::router(AppState::new(Arc::new(FailingGameStore)))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    let body = String::from_utf8(bytes.to_vec()).expect("utf-8 body");
    (status, body)
}

/// Send a GET request and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("build request");
    send(app, request).await
}

/// Send a JSON request with the given method and return (status, body).
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request");
    send(app, request).await
}

/// Send a DELETE request and return (status, body).
pub async fn delete(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .expect("build request");
    send(app, request).await
}
