/// MongoDB-backed store implementation.
pub mod mongodb;

use ::mongodb::bson::oid::ObjectId;
use futures::future::BoxFuture;

use crate::dao::models::{GameEntity, NewGame};
use crate::dao::storage::StorageResult;

/// Abstraction over the persistence layer for game documents.
///
/// Lookups return `Ok(None)` for an absent id; only backend failures surface
/// as errors.
pub trait GameStore: Send + Sync {
    /// Persist a new game, letting the store assign its identifier.
    fn insert_game(&self, game: NewGame) -> BoxFuture<'static, StorageResult<GameEntity>>;
    /// Fetch a single game by id.
    fn find_game(&self, id: ObjectId) -> BoxFuture<'static, StorageResult<Option<GameEntity>>>;
    /// Fetch every stored game.
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>>;
    /// Overwrite a stored game in place.
    fn update_game(&self, game: GameEntity) -> BoxFuture<'static, StorageResult<()>>;
    /// Remove a game by id, reporting whether a document was deleted.
    fn delete_game(&self, id: ObjectId) -> BoxFuture<'static, StorageResult<bool>>;
}
