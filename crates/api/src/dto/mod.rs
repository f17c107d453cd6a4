pub mod caller;
pub mod hostname;

pub use caller::{CallerInfoResponse, CallerResponse};
pub use hostname::HostnameResponse;
