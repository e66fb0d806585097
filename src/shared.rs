use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::game::registry::GameRegistry;
use crate::persistence::store::SaveStore;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<GameRegistry>,
    pub save_store: Arc<dyn SaveStore + Send + Sync>,
}

impl AppState {
    pub fn new(registry: Arc<GameRegistry>, save_store: Arc<dyn SaveStore + Send + Sync>) -> Self {
        Self {
            registry,
            save_store,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Game {0} not found")]
    GameNotFound(String),

    #[error("Player {0} not found")]
    PlayerNotFound(String),

    #[error("Player names must be distinct, got {0} twice")]
    DuplicatePlayerName(String),

    #[error("Game code space exhausted")]
    CodesExhausted,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::GameNotFound(_)
            | AppError::PlayerNotFound(_)
            | AppError::DuplicatePlayerName(_) => StatusCode::BAD_REQUEST,
            AppError::CodesExhausted | AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
