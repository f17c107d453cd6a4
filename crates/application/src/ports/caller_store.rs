use async_trait::async_trait;
use hostinfo_domain::{CallerRecord, DomainError};

/// Single-slot storage for the last caller.
///
/// Writes and reads follow different error policies: a write is best
/// effort and never reports failure, a read surfaces every failure.
#[async_trait]
pub trait CallerStore: Send + Sync {
    /// Overwrite the stored record. Failures are logged and swallowed;
    /// does nothing when persistence is disabled.
    async fn try_persist(&self, record: &CallerRecord);

    /// Read the stored record.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(record))` - The last persisted record
    /// * `Ok(None)` - Persistence is disabled
    ///
    /// # Errors
    ///
    /// * `DomainError::RecordReadFailure` - Backing file missing or unreadable
    /// * `DomainError::RecordParseFailure` - Backing file is not a valid record
    async fn must_read(&self) -> Result<Option<CallerRecord>, DomainError>;

    fn is_enabled(&self) -> bool;
}
