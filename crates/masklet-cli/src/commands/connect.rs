//! `masklet connect` — request wallet access and show the default account.

use std::path::PathBuf;

use masklet_core::units::to_eth_unit;

/// Run the `connect` subcommand.
pub async fn run(config: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let masks = super::load_masks(config)?;

    let Some(account) = masks.eth_enabled().await? else {
        println!("No wallet available (set wallet_url or MASKLET_WALLET_URL).");
        return Ok(());
    };

    let wei = masks.adapter().get_eth_balance(account).await?;
    println!("Account: {account}");
    println!("Balance: {} ETH", to_eth_unit(wei));
    Ok(())
}
