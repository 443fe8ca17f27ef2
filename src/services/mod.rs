/// OpenAPI document assembly.
pub mod documentation;
/// Operations on the game resource.
pub mod game_service;
