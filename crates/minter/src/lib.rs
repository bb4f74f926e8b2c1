//! Off-chain EIP-712 voucher signing for DBio lazy minting.
//!
//! A [`VoucherMinter`] is bound to one deployed contract and one signing key. It
//! builds voucher records, binds them to the contract's signing domain and has
//! the signer produce an EIP-712 signature. The resulting [`SignedVoucher`] is
//! handed to whoever redeems it on-chain; nothing is persisted here.
//!
//! # Features
//!
//! - `serde` - Enables serialization of vouchers and [`MinterConfig`]
//! - `toml` - Enables loading [`MinterConfig`] from TOML text
//! - `provider` - Enables [`ProviderContract`], which reads the chain id from the
//!   deployed contract through an alloy provider
//!
//! # Example
//!
//! ```ignore
//! use alloy_primitives::{U256, address};
//! use alloy_signer_local::PrivateKeySigner;
//! use dbio_minter::{Deployment, VoucherMinter};
//!
//! let contract = Deployment::new(address!("5FbDB2315678afecb367f032d93F642f64180aa3"), 31337);
//! let minter = VoucherMinter::new(contract, PrivateKeySigner::random());
//!
//! let voucher = minter
//!     .create_voucher(U256::from(1), "ipfs://bafy...", Some(U256::from(10).pow(U256::from(18))))
//!     .await?;
//! let call = voucher.redeem_call(redeemer);
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod config;
mod error;
mod handle;
mod minter;
mod voucher;

#[cfg(feature = "provider")]
mod provider;

pub use config::MinterConfig;
pub use error::{BoxError, MintError};
pub use handle::{ContractHandle, Deployment};
pub use minter::VoucherMinter;
pub use voucher::{SignedVoucher, VoucherDraft};

#[cfg(feature = "provider")]
pub use provider::{ProviderContract, ProviderHandleError};

// Re-export the voucher structs so callers need not depend on the bindings crate
pub use dbio_contracts::{priced, sequential};
