//! # Hostinfo Server
//!
//! Main entry point: reports this host's FQDN over HTTP

use clap::Parser;
use hostinfo::bootstrap::{init_logging, load_config};
use hostinfo::cli::Cli;
use hostinfo::di::build_app_state;
use hostinfo::server::start_web_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config_path(), cli.overrides())?;
    init_logging(&config);

    let state = build_app_state(&config);
    start_web_server(&config, state).await
}
