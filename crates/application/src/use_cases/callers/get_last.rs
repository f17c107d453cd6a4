use crate::ports::CallerStore;
use hostinfo_domain::{CallerRecord, DomainError};
use std::sync::Arc;

pub struct GetLastCallerUseCase {
    store: Arc<dyn CallerStore>,
}

impl GetLastCallerUseCase {
    pub fn new(store: Arc<dyn CallerStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<Option<CallerRecord>, DomainError> {
        self.store.must_read().await
    }
}
