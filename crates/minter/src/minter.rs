//! The voucher minter: builds voucher drafts and signs them with EIP-712.

use alloy_primitives::U256;
use alloy_signer::Signer;
use alloy_sol_types::Eip712Domain;
use dbio_contracts::{priced, sequential};
use once_cell::sync::OnceCell;
use tracing::{debug, trace, warn};

use crate::{ContractHandle, MintError, MinterConfig, SignedVoucher, VoucherDraft};

/// Creates signed vouchers for one deployed contract with one signing key.
///
/// The contract handle and signer are owned by the caller; the minter only
/// borrows their behaviour. The signing domain is resolved from the contract on
/// first use and reused for the lifetime of the minter.
///
/// # Example
///
/// ```ignore
/// use alloy_primitives::U256;
/// use dbio_minter::{Deployment, VoucherMinter};
///
/// let minter = VoucherMinter::new(Deployment::new(contract_address, 31337), signer);
/// let voucher = minter
///     .create_voucher(U256::from(1), "ipfs://bafy...", None)
///     .await?;
/// ```
#[derive(Debug)]
pub struct VoucherMinter<C, S> {
    /// The contract vouchers are redeemed against.
    contract: C,
    /// The key authorized to mint on `contract`.
    signer: S,
    config: MinterConfig,
    /// Signing domain, populated once from `contract`.
    domain: OnceCell<Eip712Domain>,
}

impl<C, S> VoucherMinter<C, S> {
    /// Creates a minter using the default DBio signing domain identity.
    pub fn new(contract: C, signer: S) -> Self {
        Self::with_config(contract, signer, MinterConfig::default())
    }

    /// Creates a minter with a custom signing domain identity.
    pub const fn with_config(contract: C, signer: S, config: MinterConfig) -> Self {
        Self {
            contract,
            signer,
            config,
            domain: OnceCell::new(),
        }
    }

    /// Returns a reference to the contract handle.
    pub const fn contract(&self) -> &C {
        &self.contract
    }

    /// Returns a reference to the signer.
    pub const fn signer(&self) -> &S {
        &self.signer
    }

    /// Returns the configuration.
    pub const fn config(&self) -> &MinterConfig {
        &self.config
    }

    /// Returns the signing domain if it has been resolved.
    pub fn cached_domain(&self) -> Option<&Eip712Domain> {
        self.domain.get()
    }
}

impl<C, S> VoucherMinter<C, S>
where
    C: ContractHandle,
    S: Signer + Send + Sync,
{
    /// Returns the signing domain, querying the contract's chain id on first use.
    ///
    /// Concurrent first calls may each query the contract. They compute the same
    /// domain and the first one stored is kept.
    ///
    /// # Errors
    ///
    /// Returns [`MintError::Contract`] if the chain id cannot be determined.
    pub async fn signing_domain(&self) -> Result<&Eip712Domain, MintError> {
        if let Some(domain) = self.domain.get() {
            return Ok(domain);
        }

        let chain_id = self.contract.chain_id().await.map_err(MintError::contract)?;
        let verifying_contract = self.contract.address();

        if let Some(signer_chain) = self.signer.chain_id() {
            if signer_chain != chain_id {
                warn!(
                    signer_chain,
                    contract_chain = chain_id,
                    "signer is pinned to a different chain than the contract"
                );
            }
        }

        let domain = self.domain.get_or_init(|| self.config.domain(verifying_contract, chain_id));
        debug!(%verifying_contract, chain_id, name = ?domain.name, "resolved signing domain");
        Ok(domain)
    }

    /// Creates a voucher for `token_id` with an optional minimum price.
    ///
    /// `min_price` is in wei and defaults to zero.
    ///
    /// # Errors
    ///
    /// Fails with [`MintError::EmptyUri`] before contacting any collaborator if
    /// `uri` is blank. Contract and signer failures are returned unchanged.
    pub async fn create_voucher(
        &self,
        token_id: U256,
        uri: impl Into<String>,
        min_price: Option<U256>,
    ) -> Result<SignedVoucher<priced::NFTVoucher>, MintError> {
        let draft = priced::NFTVoucher {
            tokenId: token_id,
            uri: uri.into(),
            minPrice: min_price.unwrap_or(U256::ZERO),
        };
        self.sign_draft(draft).await
    }

    /// Creates a voucher for a contract that assigns token ids on redemption.
    ///
    /// # Errors
    ///
    /// See [`create_voucher`](Self::create_voucher).
    pub async fn create_sequential_voucher(
        &self,
        uri: impl Into<String>,
    ) -> Result<SignedVoucher<sequential::NFTVoucher>, MintError> {
        self.sign_draft(sequential::NFTVoucher { uri: uri.into() }).await
    }

    /// Validates and signs an arbitrary voucher draft.
    pub async fn sign_draft<D>(&self, draft: D) -> Result<SignedVoucher<D>, MintError>
    where
        D: VoucherDraft,
    {
        draft.validate()?;

        let domain = self.signing_domain().await?;
        trace!(uri = draft.uri(), signer = %self.signer.address(), "signing voucher");

        let signature = self.signer.sign_typed_data(&draft, domain).await?;
        Ok(SignedVoucher::new(draft, signature))
    }
}
