use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Caller record persistence.
///
/// Persistence is optional: with no `dir_path` nothing is written and
/// reads report "no record".
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub dir_path: Option<PathBuf>,

    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl StorageConfig {
    /// Full path of the record file, if persistence is enabled.
    pub fn record_path(&self) -> Option<PathBuf> {
        self.dir_path.as_ref().map(|dir| dir.join(&self.file_name))
    }
}

fn default_file_name() -> String {
    "callerInfo".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir_path: None,
            file_name: default_file_name(),
        }
    }
}
