use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::dao::models::GameEntity;

/// BSON shape of a game in the `games` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub price: String,
    pub genre: String,
}

impl From<GameEntity> for GameDocument {
    fn from(value: GameEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            price: value.price,
            genre: value.genre,
        }
    }
}

impl From<GameDocument> for GameEntity {
    fn from(value: GameDocument) -> Self {
        Self {
            id: value.id,
            name: value.name,
            price: value.price,
            genre: value.genre,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_entity_conversion_preserves_fields() {
        let entity = GameEntity {
            id: ObjectId::new(),
            name: "Gothic III".to_owned(),
            price: "89.99".to_owned(),
            genre: "RPG".to_owned(),
        };

        let document: GameDocument = entity.clone().into();
        assert_eq!(document.id, entity.id);

        let back: GameEntity = document.into();
        assert_eq!(back, entity);
    }
}
