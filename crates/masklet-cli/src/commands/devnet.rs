//! `masklet devnet` — start the demo chain server.
//!
//! Spawns an in-memory chain, serves `GET /` and `GET /transact`, and shuts
//! down on Ctrl+C. The chain is discarded on exit.

use std::net::SocketAddr;
use std::path::PathBuf;

use masklet_devnet::DevnetServer;

/// Run the `devnet` subcommand.
pub async fn run(
    config_path: Option<PathBuf>,
    addr: Option<SocketAddr>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = super::load_config(config_path)?.devnet;
    if let Some(addr) = addr {
        config.bind = addr;
    }

    DevnetServer::run(&config).await?;
    Ok(())
}
