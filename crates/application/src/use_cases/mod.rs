pub mod callers;
pub mod fqdn;

// Re-export use cases
pub use callers::{GetLastCallerUseCase, RecordCallerUseCase};
pub use fqdn::{FallbackReason, ResolveFqdnUseCase};
