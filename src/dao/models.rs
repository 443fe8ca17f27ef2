use mongodb::bson::oid::ObjectId;

/// A game document as held by the entity store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEntity {
    /// Store-assigned identifier, immutable after creation.
    pub id: ObjectId,
    /// Name of the game.
    pub name: String,
    /// Price of the game, kept as text.
    pub price: String,
    /// Genre of the game.
    pub genre: String,
}

/// Field values for a game that has not been assigned an identifier yet.
#[derive(Debug, Clone)]
pub struct NewGame {
    /// Name of the game.
    pub name: String,
    /// Price of the game, kept as text.
    pub price: String,
    /// Genre of the game.
    pub genre: String,
}
