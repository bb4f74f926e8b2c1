//! Error types for voucher minting.

use thiserror::Error;

/// Boxed error returned by a [`ContractHandle`](crate::ContractHandle).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when creating or checking a voucher.
#[derive(Debug, Error)]
pub enum MintError {
    /// The voucher's metadata URI was empty or blank.
    #[error("voucher uri must not be empty")]
    EmptyUri,

    /// The contract handle could not supply the chain id.
    #[error("contract handle failed: {0}")]
    Contract(#[source] BoxError),

    /// The signer rejected the typed-data signing request.
    #[error(transparent)]
    Signer(#[from] alloy_signer::Error),

    /// The signer address could not be recovered from a voucher signature.
    #[error(transparent)]
    Recovery(#[from] alloy_primitives::SignatureError),
}

impl MintError {
    /// Wraps a contract handle error, keeping it as the source.
    pub(crate) fn contract<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Contract(err.into())
    }
}
