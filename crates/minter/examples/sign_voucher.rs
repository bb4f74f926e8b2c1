//! Signs a voucher with a Hardhat development key and prints the redeem calldata.
//!
//! ```sh
//! RUST_LOG=dbio_minter=trace cargo run -p dbio-minter --example sign_voucher
//! ```

use alloy_primitives::{U256, address, b256, hex};
use alloy_signer_local::PrivateKeySigner;
use alloy_sol_types::SolCall;
use dbio_minter::{Deployment, MintError, VoucherMinter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), MintError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let signer = PrivateKeySigner::from_bytes(&b256!(
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
    ))
    .map_err(|e| MintError::Signer(alloy_signer::Error::other(e)))?;
    let contract = Deployment::new(address!("5FbDB2315678afecb367f032d93F642f64180aa3"), 31337);
    let redeemer = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");

    let minter = VoucherMinter::new(contract, signer);
    let voucher = minter
        .create_voucher(
            U256::from(1),
            "ipfs://bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi",
            Some(U256::from(10).pow(U256::from(18))),
        )
        .await?;

    let domain = minter.signing_domain().await?;
    println!("signer:    {}", minter.signer().address());
    println!("recovered: {}", voucher.recover_signer(domain)?);
    println!("signature: {}", voucher.signature_bytes());
    println!("calldata:  0x{}", hex::encode(voucher.redeem_call(redeemer).abi_encode()));

    Ok(())
}
