use serde::{Deserialize, Serialize};

/// Request payload for starting a new game.
///
/// Omitting `player2_name` creates a computer-controlled opponent.
#[derive(Debug, Deserialize)]
pub struct StartGameRequest {
    pub player1_name: String,
    pub player2_name: Option<String>,
}

/// Response for game creation: where to play the new game
#[derive(Debug, Serialize, Deserialize)]
pub struct GameUrlResponse {
    pub game_url: String,
}

/// Request payload for incrementing a player's score
#[derive(Debug, Deserialize)]
pub struct IncreaseScoreRequest {
    pub player_name: String,
    pub game_code: String,
}

/// Request payload for saving a game to disk
#[derive(Debug, Deserialize)]
pub struct SaveGameRequest {
    pub game_code: String,
}

/// Query parameters for the game view
#[derive(Debug, Deserialize)]
pub struct GameViewQuery {
    pub game_code: String,
}
