// Library crate for the scorekeeper web service
// This file exposes the public API for integration tests

pub mod game;
pub mod persistence;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use game::{load_saved_games, Game, GameRegistry, GameService, Player, CPU_PLAYER_NAME};
pub use persistence::{FileSaveStore, InMemorySaveStore, SaveRecord, SaveStore};
pub use shared::{AppError, AppState};

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Builds the application router with all routes wired to the given state
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(game::index))
        .route("/game", get(game::game_view))
        .route("/start-game", post(game::start_game))
        .route("/increase-score", post(game::increase_score))
        .route("/save-game", post(game::save_game))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
