use hostinfo_api::AppState;
use hostinfo_application::ports::{CallerStore, HostLookup};
use hostinfo_application::use_cases::{
    GetLastCallerUseCase, RecordCallerUseCase, ResolveFqdnUseCase,
};
use hostinfo_domain::Config;
use hostinfo_infrastructure::{FileCallerStore, SystemHostLookup};
use std::sync::Arc;

/// Wire the OS-backed adapters into the HTTP state.
pub fn build_app_state(config: &Config) -> AppState {
    let lookup: Arc<dyn HostLookup> = Arc::new(SystemHostLookup::new());
    let store: Arc<dyn CallerStore> = Arc::new(FileCallerStore::from_config(&config.storage));
    app_state_with(lookup, store)
}

pub fn app_state_with(lookup: Arc<dyn HostLookup>, store: Arc<dyn CallerStore>) -> AppState {
    AppState {
        resolve_fqdn: Arc::new(ResolveFqdnUseCase::new(lookup)),
        record_caller: Arc::new(RecordCallerUseCase::new(Arc::clone(&store))),
        get_last_caller: Arc::new(GetLastCallerUseCase::new(store)),
    }
}
