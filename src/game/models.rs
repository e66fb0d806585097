use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::shared::AppError;

/// Name given to the automatically created opponent when no second
/// human player is supplied
pub const CPU_PLAYER_NAME: &str = "CPUPlayer";

/// A participant in one game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub score: u32,
}

impl Player {
    /// Creates a new player with a fresh id and a score of zero
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            score: 0,
        }
    }

    /// Creates the computer-controlled opponent
    pub fn cpu() -> Self {
        Self::new(CPU_PLAYER_NAME)
    }
}

/// One score-tracking session between exactly two players,
/// addressed by a 4-letter session code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    code: String,
    /// Player names in creation order, for rendering
    player_order: [String; 2],
    players: HashMap<String, Player>,
}

impl Game {
    /// Builds a game from a code and two players.
    ///
    /// Player names are map keys, so they must be distinct; a collision
    /// is rejected instead of silently overwriting one player.
    pub fn new(code: String, player1: Player, player2: Player) -> Result<Self, AppError> {
        if player1.name == player2.name {
            return Err(AppError::DuplicatePlayerName(player1.name));
        }

        let player_order = [player1.name.clone(), player2.name.clone()];
        let players = HashMap::from([
            (player1.name.clone(), player1),
            (player2.name.clone(), player2),
        ]);

        Ok(Self {
            code,
            player_order,
            players,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn player1(&self) -> &Player {
        // Present by construction
        &self.players[&self.player_order[0]]
    }

    pub fn player2(&self) -> &Player {
        &self.players[&self.player_order[1]]
    }

    pub fn has_player(&self, player_name: &str) -> bool {
        self.players.contains_key(player_name)
    }

    pub fn get_player(&self, player_name: &str) -> Result<&Player, AppError> {
        self.players
            .get(player_name)
            .ok_or_else(|| AppError::PlayerNotFound(player_name.to_string()))
    }

    /// Increments the named player's score by exactly 1
    pub fn increase_score(&mut self, player_name: &str) -> Result<(), AppError> {
        let player = self
            .players
            .get_mut(player_name)
            .ok_or_else(|| AppError::PlayerNotFound(player_name.to_string()))?;
        player.score += 1;
        Ok(())
    }

    /// Overwrites the named player's score
    pub fn set_score(&mut self, player_name: &str, score: u32) -> Result<(), AppError> {
        let player = self
            .players
            .get_mut(player_name)
            .ok_or_else(|| AppError::PlayerNotFound(player_name.to_string()))?;
        player.score = score;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_player_game() -> Game {
        Game::new(
            "ABCD".to_string(),
            Player::new("alice"),
            Player::new("bob"),
        )
        .unwrap()
    }

    #[test]
    fn test_new_player_starts_at_zero() {
        let player = Player::new("alice");
        assert_eq!(player.name, "alice");
        assert_eq!(player.score, 0);
    }

    #[test]
    fn test_player_ids_are_fresh_per_construction() {
        let a = Player::new("alice");
        let b = Player::new("alice");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_cpu_player_name() {
        let cpu = Player::cpu();
        assert_eq!(cpu.name, CPU_PLAYER_NAME);
        assert_eq!(cpu.score, 0);
    }

    #[test]
    fn test_duplicate_player_names_rejected() {
        let result = Game::new(
            "ABCD".to_string(),
            Player::new("alice"),
            Player::new("alice"),
        );
        assert!(matches!(result, Err(AppError::DuplicatePlayerName(_))));
    }

    #[test]
    fn test_get_player_unknown_name() {
        let game = two_player_game();
        let result = game.get_player("charlie");
        assert!(matches!(result, Err(AppError::PlayerNotFound(_))));
    }

    #[test]
    fn test_increase_score_increments_by_one() {
        let mut game = two_player_game();

        for _ in 0..3 {
            game.increase_score("alice").unwrap();
        }

        assert_eq!(game.get_player("alice").unwrap().score, 3);
        assert_eq!(game.get_player("bob").unwrap().score, 0);
    }

    #[test]
    fn test_increase_score_unknown_player() {
        let mut game = two_player_game();
        let result = game.increase_score("charlie");
        assert!(matches!(result, Err(AppError::PlayerNotFound(_))));
    }

    #[test]
    fn test_set_score_overwrites() {
        let mut game = two_player_game();
        game.set_score("bob", 42).unwrap();
        assert_eq!(game.get_player("bob").unwrap().score, 42);
    }

    #[test]
    fn test_player_order_preserved() {
        let game = two_player_game();
        assert_eq!(game.player1().name, "alice");
        assert_eq!(game.player2().name, "bob");
    }

    #[test]
    fn test_game_serialization_round_trip() {
        let mut game = two_player_game();
        game.increase_score("alice").unwrap();

        let encoded = serde_json::to_string(&game).unwrap();
        let decoded: Game = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.code(), "ABCD");
        assert_eq!(decoded.get_player("alice").unwrap().score, 1);
        assert_eq!(decoded.get_player("bob").unwrap().score, 0);
    }
}
