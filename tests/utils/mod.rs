pub mod actions;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use actions::{get_page, increase_score, save_game, start_game};
#[allow(unused_imports)]
pub use setup::{TestSetup, TestSetupBuilder};
