use axum::{
    extract::{Host, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{
    service::GameService,
    types::{
        GameUrlResponse, GameViewQuery, IncreaseScoreRequest, SaveGameRequest, StartGameRequest,
    },
    views,
};
use crate::shared::{AppError, AppState};

fn service(state: &AppState) -> GameService {
    GameService::new(Arc::clone(&state.registry), Arc::clone(&state.save_store))
}

/// HTTP handler for the landing page
///
/// GET /
#[instrument(name = "index")]
pub async fn index() -> Html<String> {
    Html(views::index_page())
}

/// HTTP handler for starting a new game
///
/// POST /start-game
/// Returns the URL of the freshly created game
#[instrument(name = "start_game", skip(state))]
pub async fn start_game(
    State(state): State<AppState>,
    Host(host): Host,
    Json(request): Json<StartGameRequest>,
) -> Result<Json<GameUrlResponse>, AppError> {
    info!(player1_name = %request.player1_name, "Starting new game");

    let game = service(&state)
        .start_game(request.player1_name, request.player2_name)
        .await?;

    let game_url = format!("http://{}/game?game_code={}", host, game.code());
    info!(code = %game.code(), game_url = %game_url, "Game started successfully");

    Ok(Json(GameUrlResponse { game_url }))
}

/// HTTP handler for incrementing a player's score
///
/// POST /increase-score
/// Responds 200 with an empty body; 400 when the game or player is unknown
#[instrument(name = "increase_score", skip(state))]
pub async fn increase_score(
    State(state): State<AppState>,
    Json(request): Json<IncreaseScoreRequest>,
) -> Result<StatusCode, AppError> {
    service(&state)
        .increase_score(&request.game_code, &request.player_name)
        .await?;

    Ok(StatusCode::OK)
}

/// HTTP handler for saving a game to disk
///
/// POST /save-game
/// Responds 200 with an empty body; 400 when the game is unknown
#[instrument(name = "save_game", skip(state))]
pub async fn save_game(
    State(state): State<AppState>,
    Json(request): Json<SaveGameRequest>,
) -> Result<StatusCode, AppError> {
    service(&state).save_game(&request.game_code).await?;

    Ok(StatusCode::OK)
}

/// HTTP handler for the game view
///
/// GET /game?game_code=CODE
/// An unknown code renders the error page, still with status 200
#[instrument(name = "game_view", skip(state))]
pub async fn game_view(
    State(state): State<AppState>,
    Query(query): Query<GameViewQuery>,
) -> Html<String> {
    match service(&state).view_game(&query.game_code).await {
        Ok(game) => Html(views::game_page(&game)),
        Err(e) => {
            warn!(game_code = %query.game_code, error = %e, "Rendering game-not-found page");
            Html(views::game_not_found_page(&query.game_code))
        }
    }
}
