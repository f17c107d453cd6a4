use hostinfo_application::use_cases::{
    GetLastCallerUseCase, RecordCallerUseCase, ResolveFqdnUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub resolve_fqdn: Arc<ResolveFqdnUseCase>,
    pub record_caller: Arc<RecordCallerUseCase>,
    pub get_last_caller: Arc<GetLastCallerUseCase>,
}
