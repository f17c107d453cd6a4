use super::{internal_error, request_host};
use crate::{dto::HostnameResponse, state::AppState};
use axum::{
    extract::{ConnectInfo, State},
    http::{HeaderMap, StatusCode, Uri},
    Json,
};
use std::net::SocketAddr;
use tracing::{error, instrument};

/// Records the caller, then answers with this host's FQDN.
#[instrument(skip_all, name = "api_get_hostname")]
pub async fn get_hostname(
    State(state): State<AppState>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Json<HostnameResponse>, (StatusCode, String)> {
    let host = request_host(&headers, &uri);
    state
        .record_caller
        .execute(&host, &remote.to_string())
        .await;

    match state.resolve_fqdn.execute().await {
        Ok(hostname) => Ok(Json(HostnameResponse { hostname })),
        Err(e) => {
            error!(error = %e, "Failed to resolve FQDN");
            Err(internal_error(e))
        }
    }
}
