use async_trait::async_trait;
use hostinfo_application::ports::CallerStore;
use hostinfo_domain::config::StorageConfig;
use hostinfo_domain::{CallerRecord, DomainError};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error};

#[cfg(unix)]
const RECORD_FILE_MODE: u32 = 0o644;

/// Caller record kept as a JSON document in a single file.
///
/// No locking: the file is truncated and rewritten on every persist,
/// so a concurrent reader can observe a torn or missing file.
#[derive(Debug, Clone)]
pub struct FileCallerStore {
    path: Option<PathBuf>,
}

impl FileCallerStore {
    pub fn new(dir: impl AsRef<Path>, file_name: &str) -> Self {
        Self {
            path: Some(dir.as_ref().join(file_name)),
        }
    }

    /// A store with persistence turned off.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self {
            path: config.record_path(),
        }
    }

    async fn persist(&self, path: &Path, record: &CallerRecord) -> Result<(), DomainError> {
        let raw = serde_json::to_vec(record)
            .map_err(|e| DomainError::PersistFailure(format!("unable to marshal: {}", e)))?;

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(RECORD_FILE_MODE);

        let mut file = options
            .open(path)
            .await
            .map_err(|e| DomainError::PersistFailure(format!("{}: {}", path.display(), e)))?;
        file.write_all(&raw)
            .await
            .map_err(|e| DomainError::PersistFailure(format!("{}: {}", path.display(), e)))?;
        file.flush()
            .await
            .map_err(|e| DomainError::PersistFailure(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }
}

#[async_trait]
impl CallerStore for FileCallerStore {
    async fn try_persist(&self, record: &CallerRecord) {
        let Some(path) = self.path.as_deref() else {
            return;
        };

        match self.persist(path, record).await {
            Ok(()) => debug!(path = %path.display(), "Caller info written"),
            Err(e) => error!(error = %e, "Unable to write caller info"),
        }
    }

    async fn must_read(&self) -> Result<Option<CallerRecord>, DomainError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(None);
        };

        let raw = fs::read(path).await.map_err(|e| {
            error!(error = %e, path = %path.display(), "Unable to read caller info");
            DomainError::RecordReadFailure(format!("open {}: {}", path.display(), e))
        })?;

        let record = serde_json::from_slice(&raw).map_err(|e| {
            error!(error = %e, path = %path.display(), "Unable to unmarshal caller info");
            DomainError::RecordParseFailure(e.to_string())
        })?;

        Ok(Some(record))
    }

    fn is_enabled(&self) -> bool {
        self.path.is_some()
    }
}
