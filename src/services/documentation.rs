use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the Games API.
#[openapi(
    info(title = "Games API", description = "Games API Info"),
    paths(
        crate::routes::game::list_games,
        crate::routes::game::get_game,
        crate::routes::game::create_game,
        crate::routes::game::update_game,
        crate::routes::game::delete_game,
    ),
    components(
        schemas(
            crate::dto::game::GameResponse,
            crate::dto::game::CreateGameRequest,
            crate::dto::game::UpdateGameRequest,
            crate::dto::game::MessageResponse,
        )
    ),
    tags(
        (name = "games", description = "Games API"),
    )
)]
pub struct ApiDoc;
