use axum::Router;
use hostinfo_api::{create_api_routes, AppState};
use hostinfo_domain::Config;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn create_app(state: AppState) -> Router {
    create_api_routes(state).layer(TraceLayer::new_for_http())
}

/// Bind the configured address and serve until the process is killed.
pub async fn start_web_server(config: &Config, state: AppState) -> anyhow::Result<()> {
    let ip: IpAddr = config.server.bind_address.parse()?;
    let addr = SocketAddr::new(ip, config.server.port);

    info!(addr = %addr, "Starting HTTP server");
    match config.storage.record_path() {
        Some(path) => info!(path = %path.display(), "Storing caller info"),
        None => info!("DIR_PATH not set, caller info persistence disabled"),
    }

    let listener = TcpListener::bind(addr).await?;
    serve(listener, state).await
}

pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    let app = create_app(state);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
