use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use super::codes::CodeAllocator;
use super::models::{Game, Player};
use crate::shared::AppError;

struct RegistryInner {
    /// A mapping from session code to game
    games: HashMap<String, Game>,
    allocator: CodeAllocator,
}

/// In-memory store of all active games.
///
/// Code allocation and game insertion happen under one write lock, so a
/// freshly allocated code is stored before anyone else can allocate.
/// Score increments also run under the lock; concurrent calls for the
/// same player serialize instead of losing updates.
pub struct GameRegistry {
    inner: RwLock<RegistryInner>,
}

impl GameRegistry {
    /// Builds a registry pre-populated with games restored from disk.
    /// Codes already in use are excluded from the allocation sequence.
    pub fn new(restored: Vec<Game>) -> Self {
        let mut games = HashMap::new();
        for game in restored {
            // Last loaded wins on code collision
            if let Some(previous) = games.insert(game.code().to_string(), game) {
                warn!(code = %previous.code(), "Duplicate saved game, keeping last loaded");
            }
        }

        let taken: HashSet<String> = games.keys().cloned().collect();
        let allocator = CodeAllocator::new(&taken);

        info!(game_count = games.len(), "Game registry initialized");

        Self {
            inner: RwLock::new(RegistryInner { games, allocator }),
        }
    }

    /// Starts a new game under the next unused session code
    #[instrument(skip(self, player1, player2), fields(player1 = %player1.name, player2 = %player2.name))]
    pub async fn new_game(&self, player1: Player, player2: Player) -> Result<Game, AppError> {
        // Validate before allocating: a rejected request must not burn
        // a session code, the cursor never moves backwards
        if player1.name == player2.name {
            return Err(AppError::DuplicatePlayerName(player1.name));
        }

        let mut inner = self.inner.write().await;

        let code = inner.allocator.next_code()?;
        let game = Game::new(code.clone(), player1, player2)?;
        inner.games.insert(code.clone(), game.clone());

        info!(code = %code, "New game registered");
        Ok(game)
    }

    /// Returns a snapshot of the game stored under the given code
    #[instrument(skip(self))]
    pub async fn get_game(&self, code: &str) -> Result<Game, AppError> {
        let inner = self.inner.read().await;
        match inner.games.get(code) {
            Some(game) => {
                debug!(code = %code, "Game found");
                Ok(game.clone())
            }
            None => {
                debug!(code = %code, "Game not found");
                Err(AppError::GameNotFound(code.to_string()))
            }
        }
    }

    /// Increments the named player's score by 1, atomically
    #[instrument(skip(self))]
    pub async fn increase_score(&self, code: &str, player_name: &str) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        let game = inner
            .games
            .get_mut(code)
            .ok_or_else(|| AppError::GameNotFound(code.to_string()))?;
        game.increase_score(player_name)?;

        debug!(code = %code, player_name = %player_name, "Score increased");
        Ok(())
    }

    pub async fn game_count(&self) -> usize {
        self.inner.read().await.games.len()
    }

    /// Number of session codes not yet allocated
    pub async fn remaining_codes(&self) -> usize {
        self.inner.read().await.allocator.remaining()
    }
}
