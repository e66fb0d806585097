use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use super::record::SaveRecord;
use crate::shared::AppError;

/// Extension for save files, one file per saved session
pub const SAVE_FILE_SUFFIX: &str = ".savefile";

/// Trait for save store operations
#[async_trait]
pub trait SaveStore {
    /// Writes one record, overwriting any prior save for the same code
    async fn save(&self, record: &SaveRecord) -> Result<(), AppError>;

    /// Reads every readable record; called once at startup
    async fn load_all(&self) -> Result<Vec<SaveRecord>, AppError>;
}

/// Save store backed by flat files in one directory.
///
/// Each saved game lives in `<CODE>.savefile` as a JSON `SaveRecord`.
/// The directory is created on first save. Unreadable or
/// unknown-version files are skipped at load with a warning, so one
/// bad file cannot block startup.
pub struct FileSaveStore {
    save_dir: PathBuf,
}

impl FileSaveStore {
    pub fn new(save_dir: impl Into<PathBuf>) -> Self {
        Self {
            save_dir: save_dir.into(),
        }
    }

    fn save_path(&self, code: &str) -> PathBuf {
        self.save_dir.join(format!("{}{}", code, SAVE_FILE_SUFFIX))
    }

    async fn load_record(path: &Path) -> Result<SaveRecord, AppError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| AppError::Storage(e.to_string()))
    }
}

#[async_trait]
impl SaveStore for FileSaveStore {
    #[instrument(skip(self, record), fields(code = %record.code))]
    async fn save(&self, record: &SaveRecord) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.save_dir)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        let path = self.save_path(&record.code);
        let bytes = serde_json::to_vec(record).map_err(|e| AppError::Storage(e.to_string()))?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        info!(path = %path.display(), "Game saved to disk");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn load_all(&self) -> Result<Vec<SaveRecord>, AppError> {
        if !self.save_dir.exists() {
            debug!(save_dir = %self.save_dir.display(), "No save directory, nothing to load");
            return Ok(Vec::new());
        }

        let mut entries = tokio::fs::read_dir(&self.save_dir)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        let mut records = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?
        {
            let path = entry.path();
            let is_save_file = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(SAVE_FILE_SUFFIX));
            if !is_save_file {
                continue;
            }

            match Self::load_record(&path).await {
                Ok(record) if record.is_supported() => {
                    debug!(code = %record.code, "Loaded saved game");
                    records.push(record);
                }
                Ok(record) => {
                    warn!(
                        path = %path.display(),
                        version = record.version,
                        "Skipping save file with unsupported version"
                    );
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable save file");
                }
            }
        }

        info!(record_count = records.len(), "Saved games loaded");
        Ok(records)
    }
}

/// In-memory implementation of SaveStore for development and testing
///
/// Records are kept in memory and lost when the process exits.
pub struct InMemorySaveStore {
    records: Mutex<HashMap<String, SaveRecord>>,
}

impl Default for InMemorySaveStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySaveStore {
    /// Creates a new empty in-memory store
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Creates an in-memory store with pre-populated records
    pub fn with_records(records: Vec<SaveRecord>) -> Self {
        let mut record_map = HashMap::new();
        for record in records {
            record_map.insert(record.code.clone(), record);
        }

        Self {
            records: Mutex::new(record_map),
        }
    }

    /// Returns the current number of saved records
    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Checks if a record exists for the given code
    pub fn has_record(&self, code: &str) -> bool {
        self.records.lock().unwrap().contains_key(code)
    }
}

#[async_trait]
impl SaveStore for InMemorySaveStore {
    async fn save(&self, record: &SaveRecord) -> Result<(), AppError> {
        let mut records = self.records.lock().unwrap();
        records.insert(record.code.clone(), record.clone());
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<SaveRecord>, AppError> {
        let records = self.records.lock().unwrap();
        Ok(records.values().cloned().collect())
    }
}
