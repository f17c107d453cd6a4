pub mod caller_file;

pub use caller_file::FileCallerStore;
