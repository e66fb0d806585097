// Public API - what other modules can use
pub use record::{SaveRecord, SAVE_FORMAT_VERSION};
pub use store::{FileSaveStore, InMemorySaveStore, SaveStore};

// Internal modules
pub mod record;
pub mod store;
