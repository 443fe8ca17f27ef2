use futures::{TryStreamExt, future::BoxFuture};
use mongodb::{Collection, Database, bson::doc, bson::oid::ObjectId};

use super::{
    config::MongoConfig,
    connection::establish_connection,
    error::{MongoDaoError, MongoResult},
    models::GameDocument,
};
use crate::dao::{
    game_store::GameStore,
    models::{GameEntity, NewGame},
    storage::StorageResult,
};

const GAME_COLLECTION_NAME: &str = "games";

/// MongoDB-backed implementation of [`GameStore`].
///
/// Holds a single database handle for the process lifetime; `Database` clones
/// share the underlying client.
#[derive(Clone)]
pub struct MongoGameStore {
    database: Database,
}

impl MongoGameStore {
    /// Establish the process-wide MongoDB connection.
    pub async fn connect(config: MongoConfig) -> MongoResult<Self> {
        let database = establish_connection(&config.options, &config.database_name).await?;
        Ok(Self { database })
    }

    fn collection(&self) -> Collection<GameDocument> {
        self.database.collection::<GameDocument>(GAME_COLLECTION_NAME)
    }

    async fn insert(&self, game: NewGame) -> MongoResult<GameEntity> {
        let document = GameDocument {
            id: ObjectId::new(),
            name: game.name,
            price: game.price,
            genre: game.genre,
        };

        self.collection()
            .insert_one(&document)
            .await
            .map_err(|source| MongoDaoError::InsertGame { source })?;

        Ok(document.into())
    }

    async fn find(&self, id: ObjectId) -> MongoResult<Option<GameEntity>> {
        let document = self
            .collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|source| MongoDaoError::LoadGame { id, source })?;

        Ok(document.map(Into::into))
    }

    async fn list(&self) -> MongoResult<Vec<GameEntity>> {
        let documents: Vec<GameDocument> = self
            .collection()
            .find(doc! {})
            .await
            .map_err(|source| MongoDaoError::ListGames { source })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::ListGames { source })?;

        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn update(&self, game: GameEntity) -> MongoResult<()> {
        let id = game.id;
        let document: GameDocument = game.into();

        self.collection()
            .replace_one(doc! { "_id": id }, &document)
            .await
            .map_err(|source| MongoDaoError::UpdateGame { id, source })?;

        Ok(())
    }

    async fn delete(&self, id: ObjectId) -> MongoResult<bool> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|source| MongoDaoError::DeleteGame { id, source })?;

        Ok(result.deleted_count > 0)
    }
}

impl GameStore for MongoGameStore {
    fn insert_game(&self, game: NewGame) -> BoxFuture<'static, StorageResult<GameEntity>> {
        let store = self.clone();
        Box::pin(async move { Ok(store.insert(game).await?) })
    }

    fn find_game(&self, id: ObjectId) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { Ok(store.find(id).await?) })
    }

    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { Ok(store.list().await?) })
    }

    fn update_game(&self, game: GameEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { Ok(store.update(game).await?) })
    }

    fn delete_game(&self, id: ObjectId) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { Ok(store.delete(id).await?) })
    }
}
