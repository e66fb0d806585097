use std::sync::Arc;

use axum::Router;
use scorekeeper::{app, AppState, Game, GameRegistry, InMemorySaveStore};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub app: Router,
    pub registry: Arc<GameRegistry>,
    pub save_store: Arc<InMemorySaveStore>,
}

pub struct TestSetupBuilder {
    restored_games: Vec<Game>,
    save_store: Option<Arc<InMemorySaveStore>>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            restored_games: vec![],
            save_store: None,
        }
    }

    /// Seeds the registry as if these games had been loaded from disk
    pub fn with_restored_games(mut self, games: Vec<Game>) -> Self {
        self.restored_games = games;
        self
    }

    /// Reuses an existing store, e.g. to simulate a restart
    pub fn with_save_store(mut self, store: Arc<InMemorySaveStore>) -> Self {
        self.save_store = Some(store);
        self
    }

    pub fn build(self) -> TestSetup {
        let registry = Arc::new(GameRegistry::new(self.restored_games));
        let save_store = self
            .save_store
            .unwrap_or_else(|| Arc::new(InMemorySaveStore::new()));

        let state = AppState::new(Arc::clone(&registry), save_store.clone());

        TestSetup {
            app: app(state),
            registry,
            save_store,
        }
    }
}

impl Default for TestSetupBuilder {
    fn default() -> Self {
        Self::new()
    }
}
