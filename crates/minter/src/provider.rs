//! Contract handle backed by an alloy provider.

use alloy_primitives::{Address, ChainId, TxKind, U256};
use alloy_provider::Provider;
use alloy_rpc_types_eth::{TransactionInput, TransactionRequest};
use alloy_sol_types::SolCall;
use core::future::Future;
use dbio_contracts::IDBioLazyMint;
use thiserror::Error;

use crate::ContractHandle;

/// Errors from querying a deployed contract through a provider.
#[derive(Debug, Error)]
pub enum ProviderHandleError {
    /// The `eth_call` request failed.
    #[error(transparent)]
    Transport(#[from] alloy_transport::TransportError),

    /// The contract returned data that is not a `uint256`.
    #[error(transparent)]
    Decode(#[from] alloy_sol_types::Error),

    /// The contract reported a chain id that does not fit in 64 bits.
    #[error("chain id {0} does not fit in 64 bits")]
    ChainIdOverflow(U256),
}

/// A deployed contract reached through an alloy [`Provider`].
///
/// The chain id is read from the contract's `getChainID()` view so the signing
/// domain matches what the contract itself sees as `block.chainid`.
#[derive(Debug, Clone)]
pub struct ProviderContract<P> {
    address: Address,
    provider: P,
}

impl<P> ProviderContract<P> {
    /// Creates a handle for the contract at `address`.
    pub const fn new(address: Address, provider: P) -> Self {
        Self { address, provider }
    }

    /// Returns a reference to the provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P> ContractHandle for ProviderContract<P>
where
    P: Provider + Send + Sync,
{
    type Error = ProviderHandleError;

    fn address(&self) -> Address {
        self.address
    }

    fn chain_id(&self) -> impl Future<Output = Result<ChainId, Self::Error>> + Send {
        async move {
            let calldata = IDBioLazyMint::getChainIDCall {}.abi_encode();
            let request = TransactionRequest {
                to: Some(TxKind::Call(self.address)),
                input: TransactionInput::new(calldata.into()),
                ..Default::default()
            };

            let output = self.provider.call(request).await?;
            let chain_id = IDBioLazyMint::getChainIDCall::abi_decode_returns(&output)?;

            u64::try_from(chain_id).map_err(|_| ProviderHandleError::ChainIdOverflow(chain_id))
        }
    }
}
