// Public API - what other modules can use
pub use handlers::{game_view, increase_score, index, save_game, start_game};
pub use models::{Game, Player, CPU_PLAYER_NAME};
pub use registry::GameRegistry;
pub use service::{load_saved_games, GameService};

// Internal modules
mod codes;
mod handlers;
pub mod models;
pub mod registry;
pub mod service;
pub mod types;
mod views;
