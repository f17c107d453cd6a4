pub mod caller_store;
pub mod host_lookup;

pub use caller_store::CallerStore;
pub use host_lookup::HostLookup;
