//! Unsigned voucher drafts and signed vouchers.

use alloy_primitives::{Address, B256, Bytes, Signature};
use alloy_sol_types::{Eip712Domain, SolStruct};
use dbio_contracts::{IDBioContract1155, IDBioLazyMint, priced, sequential};

use crate::MintError;

/// An unsigned voucher whose fields form an EIP-712 struct.
///
/// Implemented for [`priced::NFTVoucher`] and [`sequential::NFTVoucher`]. The
/// struct's type descriptor is part of every signature, so a deployment must sign
/// the draft type its contract verifies.
pub trait VoucherDraft: SolStruct + Send + Sync {
    /// The metadata URI the voucher mints.
    fn uri(&self) -> &str;

    /// Checks the draft before any collaborator is contacted.
    fn validate(&self) -> Result<(), MintError> {
        if self.uri().trim().is_empty() {
            return Err(MintError::EmptyUri);
        }
        Ok(())
    }
}

impl VoucherDraft for priced::NFTVoucher {
    #[inline]
    fn uri(&self) -> &str {
        &self.uri
    }
}

impl VoucherDraft for sequential::NFTVoucher {
    #[inline]
    fn uri(&self) -> &str {
        &self.uri
    }
}

/// A voucher together with the EIP-712 signature over its fields.
///
/// Signed vouchers are immutable: the fields can be read but not changed, since
/// any change would invalidate the signature.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignedVoucher<D> {
    #[cfg_attr(feature = "serde", serde(flatten))]
    voucher: D,
    #[cfg_attr(feature = "serde", serde(with = "signature_hex"))]
    signature: Signature,
}

/// Serializes a signature as the `0x`-prefixed 65-byte string `redeem` takes.
#[cfg(feature = "serde")]
mod signature_hex {
    use alloy_primitives::{Bytes, Signature};
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

    pub(super) fn serialize<S: Serializer>(sig: &Signature, serializer: S) -> Result<S::Ok, S::Error> {
        Bytes::copy_from_slice(&sig.as_bytes()).serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Signature, D::Error> {
        let bytes = Bytes::deserialize(deserializer)?;
        Signature::from_raw(&bytes).map_err(D::Error::custom)
    }
}

impl<D> SignedVoucher<D> {
    /// Pairs a draft with its signature.
    pub const fn new(voucher: D, signature: Signature) -> Self {
        Self { voucher, signature }
    }

    /// Returns the signed fields.
    pub const fn voucher(&self) -> &D {
        &self.voucher
    }

    /// Returns the signature.
    pub const fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Returns the 65-byte `r || s || v` encoding expected by `ECDSA.recover`.
    pub fn signature_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(&self.signature.as_bytes())
    }

    /// Consumes the voucher, returning the fields and the signature.
    pub fn into_parts(self) -> (D, Signature) {
        (self.voucher, self.signature)
    }
}

impl<D: SolStruct> SignedVoucher<D> {
    /// Returns the EIP-712 digest the signature was produced over.
    pub fn signing_hash(&self, domain: &Eip712Domain) -> B256 {
        self.voucher.eip712_signing_hash(domain)
    }

    /// Recovers the address that signed this voucher under `domain`.
    ///
    /// A signature always recovers to *some* address; compare it against the
    /// authorized minter rather than checking for success.
    pub fn recover_signer(&self, domain: &Eip712Domain) -> Result<Address, MintError> {
        Ok(self
            .signature
            .recover_address_from_prehash(&self.signing_hash(domain))?)
    }

    /// Returns `true` if `signer` produced this voucher's signature under `domain`.
    pub fn is_signed_by(&self, domain: &Eip712Domain, signer: Address) -> bool {
        self.recover_signer(domain).is_ok_and(|recovered| recovered == signer)
    }
}

impl SignedVoucher<priced::NFTVoucher> {
    /// Builds the `redeem` call for an [`IDBioLazyMint`] contract.
    pub fn redeem_call(&self, redeemer: Address) -> IDBioLazyMint::redeemCall {
        IDBioLazyMint::redeemCall {
            redeemer,
            voucher: IDBioLazyMint::NFTVoucher {
                tokenId: self.voucher.tokenId,
                uri: self.voucher.uri.clone(),
                minPrice: self.voucher.minPrice,
                signature: self.signature_bytes(),
            },
        }
    }
}

impl SignedVoucher<sequential::NFTVoucher> {
    /// Converts into the on-chain struct accepted by [`IDBioContract1155`].
    pub fn to_contract_voucher(&self) -> IDBioContract1155::NFTVoucher {
        IDBioContract1155::NFTVoucher {
            uri: self.voucher.uri.clone(),
            signature: self.signature_bytes(),
        }
    }

    /// Builds the `redeem` call for an [`IDBioContract1155`] contract.
    pub fn redeem_call(&self, redeemer: Address) -> IDBioContract1155::redeemCall {
        IDBioContract1155::redeemCall {
            redeemer,
            voucher: self.to_contract_voucher(),
        }
    }

    /// Builds a `redeemMany` call redeeming all `vouchers` in order.
    pub fn redeem_many_call<'a, I>(redeemer: Address, vouchers: I) -> IDBioContract1155::redeemManyCall
    where
        I: IntoIterator<Item = &'a Self>,
    {
        IDBioContract1155::redeemManyCall {
            redeemer,
            vouchers: vouchers.into_iter().map(Self::to_contract_voucher).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{U256, address};
    use alloy_sol_types::SolCall;

    fn signature() -> Signature {
        Signature::new(U256::from(1), U256::from(2), false)
    }

    #[test]
    fn test_blank_uri_rejected() {
        let draft = sequential::NFTVoucher { uri: "   ".into() };
        assert!(matches!(draft.validate(), Err(MintError::EmptyUri)));

        let draft = priced::NFTVoucher {
            tokenId: U256::from(1),
            uri: String::new(),
            minPrice: U256::ZERO,
        };
        assert!(matches!(draft.validate(), Err(MintError::EmptyUri)));
    }

    #[test]
    fn test_signature_bytes_layout() {
        let signed = SignedVoucher::new(sequential::NFTVoucher { uri: "ipfs://a".into() }, signature());
        let bytes = signed.signature_bytes();

        assert_eq!(bytes.len(), 65);
        assert_eq!(bytes[31], 1);
        assert_eq!(bytes[63], 2);
        // even y parity encodes as v = 27
        assert_eq!(bytes[64], 27);
    }

    #[test]
    fn test_priced_redeem_call_carries_fields() {
        let voucher = priced::NFTVoucher {
            tokenId: U256::from(7),
            uri: "ipfs://a".into(),
            minPrice: U256::from(1000),
        };
        let signed = SignedVoucher::new(voucher, signature());
        let redeemer = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");

        let call = signed.redeem_call(redeemer);
        assert_eq!(call.redeemer, redeemer);
        assert_eq!(call.voucher.tokenId, U256::from(7));
        assert_eq!(call.voucher.minPrice, U256::from(1000));
        assert_eq!(call.voucher.signature, signed.signature_bytes());

        let decoded = IDBioLazyMint::redeemCall::abi_decode(&call.abi_encode()).unwrap();
        assert_eq!(decoded, call);
    }

    #[test]
    fn test_redeem_many_preserves_order() {
        let first = SignedVoucher::new(sequential::NFTVoucher { uri: "ipfs://a".into() }, signature());
        let second = SignedVoucher::new(sequential::NFTVoucher { uri: "ipfs://b".into() }, signature());

        let call = SignedVoucher::<sequential::NFTVoucher>::redeem_many_call(Address::ZERO, [&first, &second]);
        let uris: Vec<_> = call.vouchers.iter().map(|v| v.uri.as_str()).collect();
        assert_eq!(uris, ["ipfs://a", "ipfs://b"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_redeemable_shape() {
        let voucher = priced::NFTVoucher {
            tokenId: U256::from(1),
            uri: "ipfs://a".into(),
            minPrice: U256::from(10).pow(U256::from(18)),
        };
        let signed = SignedVoucher::new(voucher, signature());

        let json = serde_json::to_value(&signed).unwrap();
        assert_eq!(json["uri"], "ipfs://a");
        assert!(json.get("tokenId").is_some());
        assert!(json.get("minPrice").is_some());
        assert_eq!(json["signature"], signed.signature_bytes().to_string());
        assert_eq!(json["signature"].as_str().unwrap().len(), 2 + 65 * 2);

        let decoded: SignedVoucher<priced::NFTVoucher> = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, signed);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_short_signature() {
        let json = serde_json::json!({ "uri": "ipfs://a", "signature": "0x1234" });
        assert!(serde_json::from_value::<SignedVoucher<sequential::NFTVoucher>>(json).is_err());
    }

    #[test]
    fn test_into_parts() {
        let draft = sequential::NFTVoucher { uri: "ipfs://a".into() };
        let (voucher, sig) = SignedVoucher::new(draft.clone(), signature()).into_parts();
        assert_eq!(voucher, draft);
        assert_eq!(sig, signature());
    }
}
