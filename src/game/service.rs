use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::models::{Game, Player};
use super::registry::GameRegistry;
use crate::persistence::record::SaveRecord;
use crate::persistence::store::SaveStore;
use crate::shared::AppError;

/// Service for handling game session business logic
pub struct GameService {
    registry: Arc<GameRegistry>,
    save_store: Arc<dyn SaveStore + Send + Sync>,
}

impl GameService {
    pub fn new(registry: Arc<GameRegistry>, save_store: Arc<dyn SaveStore + Send + Sync>) -> Self {
        Self {
            registry,
            save_store,
        }
    }

    /// Starts a new game session. A missing second name creates the
    /// computer-controlled opponent.
    #[instrument(skip(self))]
    pub async fn start_game(
        &self,
        player1_name: String,
        player2_name: Option<String>,
    ) -> Result<Game, AppError> {
        let player1 = Player::new(player1_name);
        let player2 = match player2_name {
            Some(name) => Player::new(name),
            None => Player::cpu(),
        };

        let game = self.registry.new_game(player1, player2).await?;

        info!(
            code = %game.code(),
            player1 = %game.player1().name,
            player2 = %game.player2().name,
            "Game started"
        );

        Ok(game)
    }

    #[instrument(skip(self))]
    pub async fn increase_score(&self, code: &str, player_name: &str) -> Result<(), AppError> {
        self.registry.increase_score(code, player_name).await
    }

    /// Snapshots the game under the given code and writes it to the
    /// save store, overwriting any prior save.
    #[instrument(skip(self))]
    pub async fn save_game(&self, code: &str) -> Result<(), AppError> {
        let game = self.registry.get_game(code).await?;
        let record = SaveRecord::new(game);
        self.save_store.save(&record).await?;

        info!(code = %code, "Game saved");
        Ok(())
    }

    /// Fetches the game for rendering
    #[instrument(skip(self))]
    pub async fn view_game(&self, code: &str) -> Result<Game, AppError> {
        debug!(code = %code, "Fetching game for view");
        self.registry.get_game(code).await
    }
}

/// Reads every saved game from the store for registry construction.
/// Runs once at startup, before the code sequence is generated.
pub async fn load_saved_games(
    store: &(dyn SaveStore + Send + Sync),
) -> Result<Vec<Game>, AppError> {
    let records = store.load_all().await?;
    Ok(records.into_iter().map(|record| record.game).collect())
}
