pub mod caller_info;
pub mod health;
pub mod hostname;

pub use caller_info::get_caller_info;
pub use health::health_check;
pub use hostname::get_hostname;

use axum::http::{header, HeaderMap, StatusCode, Uri};
use hostinfo_domain::DomainError;

/// Host the client addressed: the `Host` header, else the URI authority.
pub fn request_host(headers: &HeaderMap, uri: &Uri) -> String {
    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .or_else(|| uri.authority().map(|authority| authority.to_string()))
        .unwrap_or_default()
}

pub(crate) fn internal_error(err: DomainError) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}
