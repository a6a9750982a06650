use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use trisum_types::UsageRecord;

use crate::error::{QuotaError, Result};

/// Fixed key the usage record lives under
pub const USAGE_KEY: &str = "summaryUsage";

/// Storage for the single usage record
///
/// Implementations hold at most one record. The tracker serializes access,
/// so methods take `&mut self`.
pub trait UsageStore: Send {
    fn load(&mut self) -> Result<Option<UsageRecord>>;

    fn save(&mut self, record: &UsageRecord) -> Result<()>;

    fn remove(&mut self) -> Result<()>;
}

/// In-process store
#[derive(Debug, Clone, Default)]
pub struct MemoryUsageStore {
    record: Option<UsageRecord>,
}

impl MemoryUsageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: UsageRecord) -> Self {
        Self {
            record: Some(record),
        }
    }
}

impl UsageStore for MemoryUsageStore {
    fn load(&mut self) -> Result<Option<UsageRecord>> {
        Ok(self.record)
    }

    fn save(&mut self, record: &UsageRecord) -> Result<()> {
        self.record = Some(*record);
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        self.record = None;
        Ok(())
    }
}

/// JSON file store, `{"count":n,"firstAttempt":ms}`
#[derive(Debug, Clone)]
pub struct FileUsageStore {
    path: PathBuf,
}

impl FileUsageStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/trisum/summaryUsage.json`, when the platform has a data dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("trisum").join(format!("{}.json", USAGE_KEY)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> QuotaError {
        QuotaError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl UsageStore for FileUsageStore {
    fn load(&mut self) -> Result<Option<UsageRecord>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        match serde_json::from_str::<UsageRecord>(&contents) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Ignoring unreadable usage record"
                );
                Ok(None)
            }
        }
    }

    fn save(&mut self, record: &UsageRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let json = serde_json::to_string(record)?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))
    }

    fn remove(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}
