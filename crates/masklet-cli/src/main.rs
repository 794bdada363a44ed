//! # masklet CLI
//!
//! Entry point for the `masklet` binary.
//!
//! Subcommands:
//! - `masklet devnet`  — Start the demo chain server
//! - `masklet connect` — Show the wallet's default account
//! - `masklet balance`, `name`, `owner`, ... — Masks / NCT helpers
//! - `masklet claim`, `change-name` — Wallet-signed transactions

use std::path::PathBuf;

use alloy::primitives::{Address, B256, U256};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

/// Masklet — Masks NFT / NCT helpers and a local demo chain.
#[derive(Parser)]
#[command(name = "masklet", version, about)]
struct Cli {
    /// Path to config.yaml (default: ~/.masklet/config.yaml).
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a local test chain and serve `GET /` and `GET /transact`.
    Devnet {
        /// Address to bind the HTTP server (default: 127.0.0.1:8080).
        #[arg(long, short)]
        addr: Option<std::net::SocketAddr>,
    },

    /// Request wallet access and print the default account.
    Connect,

    /// How many more Masks the default account may buy.
    MaxBuy,

    /// Masks held by an address (default: wallet account).
    Balance {
        #[arg(long)]
        address: Option<Address>,
    },

    /// NCT held by an address (default: wallet account).
    NctBalance {
        #[arg(long)]
        address: Option<Address>,
    },

    /// Token ID of the index-th Mask held by an address.
    TokenOfOwner {
        index: U256,
        #[arg(long)]
        address: Option<Address>,
    },

    /// NCT accrued for a Mask.
    Accumulated { index: U256 },

    /// Claim accrued NCT for the given Masks.
    Claim {
        #[arg(required = true)]
        indices: Vec<U256>,
    },

    /// Rename a Mask.
    ChangeName { index: U256, name: String },

    /// Current name of a Mask.
    Name { index: U256 },

    /// Owner of a Mask.
    Owner { index: U256 },

    /// Whether a name is already taken.
    NameReserved { name: String },

    /// Receipt of a transaction.
    Receipt { hash: B256 },

    /// Timestamp of a block (number or hash).
    BlockTime { block: String },

    /// Revealed artwork index of a Mask.
    RevealIndex { index: U256 },

    /// Check an address for format and checksum.
    ValidateAddress { address: String },

    /// Convert wei to ether.
    ToEth { wei: U256 },

    /// Convert ether (e.g. 1.5) to wei.
    ToWei { ether: String },

    /// Ask the wallet for a personal signature over a message.
    Sign { message: String },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Devnet { addr } => commands::devnet::run(cli.config, addr).await,
        Commands::Connect => commands::connect::run(cli.config).await,
        Commands::MaxBuy => commands::read::max_buy(cli.config).await,
        Commands::Balance { address } => commands::read::balance(cli.config, address).await,
        Commands::NctBalance { address } => {
            commands::read::nct_balance(cli.config, address).await
        }
        Commands::TokenOfOwner { index, address } => {
            commands::read::token_of_owner(cli.config, index, address).await
        }
        Commands::Accumulated { index } => commands::read::accumulated(cli.config, index).await,
        Commands::Claim { indices } => commands::write::claim(cli.config, indices).await,
        Commands::ChangeName { index, name } => {
            commands::write::change_name(cli.config, index, name).await
        }
        Commands::Name { index } => commands::read::name(cli.config, index).await,
        Commands::Owner { index } => commands::read::owner(cli.config, index).await,
        Commands::NameReserved { name } => commands::read::name_reserved(cli.config, name).await,
        Commands::Receipt { hash } => commands::read::receipt(cli.config, hash).await,
        Commands::BlockTime { block } => commands::read::block_time(cli.config, block).await,
        Commands::RevealIndex { index } => commands::util::reveal_index(cli.config, index),
        Commands::ValidateAddress { address } => commands::util::validate_address(&address),
        Commands::ToEth { wei } => commands::util::to_eth(wei),
        Commands::ToWei { ether } => commands::util::to_wei(&ether),
        Commands::Sign { message } => commands::sign::run(cli.config, message).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
