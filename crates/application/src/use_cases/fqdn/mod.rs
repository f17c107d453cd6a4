pub mod resolve;

pub use resolve::{FallbackReason, ResolveFqdnUseCase};
