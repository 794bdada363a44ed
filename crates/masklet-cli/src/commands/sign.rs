//! `masklet sign` — request an EIP-191 personal signature from the wallet.

use std::path::PathBuf;

/// Run the `sign` subcommand.
pub async fn run(config: Option<PathBuf>, message: String) -> Result<(), Box<dyn std::error::Error>> {
    let masks = super::load_masks(config)?;

    match masks.generate_signature(message.as_bytes()).await? {
        Some(signature) => println!("{signature}"),
        None => return Err("no wallet available to sign with".into()),
    }
    Ok(())
}
