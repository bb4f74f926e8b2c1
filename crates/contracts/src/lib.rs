//! DBio contract bindings and EIP-712 voucher types.
//!
//! This crate provides type-safe Solidity bindings using Alloy's `sol!` macro for
//! the two lazy-minting protocol variants:
//!
//! - [`priced`]: `NFTVoucher(uint256 tokenId,string uri,uint256 minPrice)`, redeemed
//!   through [`IDBioLazyMint`] with an explicit token id and optional payment.
//! - [`sequential`]: `NFTVoucher(string uri)`, redeemed through [`IDBioContract1155`]
//!   which assigns token ids itself.
//!
//! Both structs share the EIP-712 type name `NFTVoucher`, so they live in separate
//! modules. Their type descriptors differ and so do the signatures over them.
//!
//! ```
//! use alloy_sol_types::SolStruct;
//! use dbio_contracts::priced::NFTVoucher;
//!
//! assert_eq!(
//!     NFTVoucher::eip712_encode_type(),
//!     "NFTVoucher(uint256 tokenId,string uri,uint256 minPrice)"
//! );
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

use alloy_sol_types::sol;

// Primitive field types come through `alloy_sol_types`; the direct dependency
// carries the `serde` feature for them.
use alloy_primitives as _;

/// EIP-712 domain name the DBio contracts are deployed with.
pub const SIGNING_DOMAIN_NAME: &str = "DBio";

/// EIP-712 domain version the DBio contracts are deployed with.
pub const SIGNING_DOMAIN_VERSION: &str = "1";

/// Voucher carrying an explicit token id and a minimum redemption price.
pub mod priced {
    use super::sol;

    #[cfg(feature = "serde")]
    sol! {
        /// EIP-712 voucher struct for explicitly numbered, price-gated mints.
        ///
        /// `minPrice` is denominated in wei. A zero price means redemption is free.
        #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        struct NFTVoucher {
            uint256 tokenId;
            string uri;
            uint256 minPrice;
        }
    }

    #[cfg(not(feature = "serde"))]
    sol! {
        /// EIP-712 voucher struct for explicitly numbered, price-gated mints.
        ///
        /// `minPrice` is denominated in wei. A zero price means redemption is free.
        #[derive(Debug, PartialEq, Eq)]
        struct NFTVoucher {
            uint256 tokenId;
            string uri;
            uint256 minPrice;
        }
    }
}

/// Voucher carrying only a metadata URI; the contract numbers tokens itself.
pub mod sequential {
    use super::sol;

    #[cfg(feature = "serde")]
    sol! {
        /// EIP-712 voucher struct for contract-numbered mints.
        #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        struct NFTVoucher {
            string uri;
        }
    }

    #[cfg(not(feature = "serde"))]
    sol! {
        /// EIP-712 voucher struct for contract-numbered mints.
        #[derive(Debug, PartialEq, Eq)]
        struct NFTVoucher {
            string uri;
        }
    }
}

sol! {
    /// Lazy-minting ERC-721 contract redeeming priced vouchers.
    ///
    /// The on-chain `NFTVoucher` carries the signature alongside the typed fields.
    #[derive(Debug, PartialEq, Eq)]
    interface IDBioLazyMint {
        struct NFTVoucher {
            uint256 tokenId;
            string uri;
            uint256 minPrice;
            bytes signature;
        }

        function getChainID() external view returns (uint256);
        function redeem(address redeemer, NFTVoucher calldata voucher) external payable returns (uint256);
    }

    /// Lazy-minting ERC-1155 contract redeeming sequential vouchers.
    #[derive(Debug, PartialEq, Eq)]
    interface IDBioContract1155 {
        struct NFTVoucher {
            string uri;
            bytes signature;
        }

        function getChainID() external view returns (uint256);
        function redeem(address redeemer, NFTVoucher calldata voucher) external returns (uint256);
        function redeemMany(address redeemer, NFTVoucher[] calldata vouchers) external returns (uint256[] memory);
    }
}
