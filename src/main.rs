use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scorekeeper::{app, game, AppState, FileSaveStore, GameRegistry};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scorekeeper=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting scorekeeper server");

    let save_dir =
        std::env::var("SCOREKEEPER_SAVE_DIR").unwrap_or_else(|_| "saves".to_string());
    let save_store = Arc::new(FileSaveStore::new(&save_dir));

    // Eagerly restore saved games; their codes are excluded from the
    // allocation sequence built below
    let restored = match game::load_saved_games(save_store.as_ref()).await {
        Ok(games) => games,
        Err(e) => {
            warn!(error = %e, "Failed to load saved games, starting empty");
            Vec::new()
        }
    };
    info!(
        save_dir = %save_dir,
        game_count = restored.len(),
        "Restored saved games"
    );

    let registry = Arc::new(GameRegistry::new(restored));
    let app_state = AppState::new(registry, save_store);

    let app = app(app_state);

    let addr = std::env::var("SCOREKEEPER_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("Server running on http://{}", addr);
    axum::serve(listener, app).await.unwrap();
}
