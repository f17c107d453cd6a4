//! Hostinfo Infrastructure Layer
pub mod storage;
pub mod system;

pub use storage::FileCallerStore;
pub use system::SystemHostLookup;
