use super::internal_error;
use crate::{dto::CallerInfoResponse, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use tracing::{error, instrument};

#[instrument(skip_all, name = "api_get_caller_info")]
pub async fn get_caller_info(
    State(state): State<AppState>,
) -> Result<Json<CallerInfoResponse>, (StatusCode, String)> {
    let caller = state.get_last_caller.execute().await.map_err(|e| {
        error!(error = %e, "Failed to read last caller");
        internal_error(e)
    })?;

    let hostname = state.resolve_fqdn.execute().await.map_err(|e| {
        error!(error = %e, "Failed to resolve FQDN");
        internal_error(e)
    })?;

    Ok(Json(CallerInfoResponse {
        hostname,
        caller: caller.map(Into::into),
    }))
}
