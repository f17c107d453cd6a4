pub mod get_last;
pub mod record;

pub use get_last::GetLastCallerUseCase;
pub use record::RecordCallerUseCase;
