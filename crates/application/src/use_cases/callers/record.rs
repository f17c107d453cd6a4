use crate::ports::CallerStore;
use hostinfo_domain::CallerRecord;
use std::sync::Arc;
use tracing::debug;

/// Use case: remember the client of the current request as the last caller.
/// Never fails; persistence is best effort.
pub struct RecordCallerUseCase {
    store: Arc<dyn CallerStore>,
}

impl RecordCallerUseCase {
    pub fn new(store: Arc<dyn CallerStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, host: &str, remote_address: &str) {
        if !self.store.is_enabled() {
            return;
        }

        let record = CallerRecord::new(host, remote_address);
        debug!(host = %record.host, remote_addr = %record.remote_address, "Recording caller");
        self.store.try_persist(&record).await;
    }
}
