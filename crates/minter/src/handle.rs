//! Contract handles supplying the address and chain id a voucher is bound to.

use alloy_primitives::{Address, ChainId};
use core::convert::Infallible;
use core::future::{self, Future};
use std::sync::Arc;

/// A reference to a deployed voucher-redeeming contract.
///
/// The minter queries [`chain_id`](Self::chain_id) at most once and caches the
/// resulting signing domain, so implementations may perform a network round trip.
pub trait ContractHandle: Send + Sync {
    /// The error returned when the chain id cannot be determined.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the address of the deployed contract.
    fn address(&self) -> Address;

    /// Returns the id of the chain the contract is deployed on.
    fn chain_id(&self) -> impl Future<Output = Result<ChainId, Self::Error>> + Send;
}

impl<T: ContractHandle> ContractHandle for &T {
    type Error = T::Error;

    #[inline]
    fn address(&self) -> Address {
        (**self).address()
    }

    #[inline]
    fn chain_id(&self) -> impl Future<Output = Result<ChainId, Self::Error>> + Send {
        (**self).chain_id()
    }
}

impl<T: ContractHandle> ContractHandle for Arc<T> {
    type Error = T::Error;

    #[inline]
    fn address(&self) -> Address {
        (**self).address()
    }

    #[inline]
    fn chain_id(&self) -> impl Future<Output = Result<ChainId, Self::Error>> + Send {
        (**self).chain_id()
    }
}

/// A contract whose address and chain id are known up front.
///
/// # Example
///
/// ```
/// use alloy_primitives::address;
/// use dbio_minter::Deployment;
///
/// let contract = Deployment::new(address!("5FbDB2315678afecb367f032d93F642f64180aa3"), 31337);
/// assert_eq!(contract.chain_id, 31337);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deployment {
    /// Contract address.
    pub address: Address,
    /// Chain the contract is deployed on.
    pub chain_id: ChainId,
}

impl Deployment {
    /// Creates a new deployment.
    #[must_use]
    pub const fn new(address: Address, chain_id: ChainId) -> Self {
        Self { address, chain_id }
    }
}

impl ContractHandle for Deployment {
    type Error = Infallible;

    fn address(&self) -> Address {
        self.address
    }

    fn chain_id(&self) -> impl Future<Output = Result<ChainId, Self::Error>> + Send {
        future::ready(Ok(self.chain_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const CONTRACT: Address = address!("5FbDB2315678afecb367f032d93F642f64180aa3");

    #[tokio::test]
    async fn test_deployment_handle() {
        let deployment = Deployment::new(CONTRACT, 31337);
        assert_eq!(deployment.address(), CONTRACT);
        assert_eq!(deployment.chain_id().await.unwrap(), 31337);
    }

    #[tokio::test]
    async fn test_borrowed_and_shared_handles() {
        let deployment = Deployment::new(CONTRACT, 100);

        let borrowed = &deployment;
        assert_eq!(ContractHandle::address(&borrowed), CONTRACT);
        assert_eq!(ContractHandle::chain_id(&borrowed).await.unwrap(), 100);

        let shared = Arc::new(deployment);
        assert_eq!(ContractHandle::address(&shared), CONTRACT);
        assert_eq!(ContractHandle::chain_id(&shared).await.unwrap(), 100);
    }
}
