//! Signing domain configuration.

use alloy_primitives::{Address, ChainId, U256};
use alloy_sol_types::Eip712Domain;
use dbio_contracts::{SIGNING_DOMAIN_NAME, SIGNING_DOMAIN_VERSION};
use std::borrow::Cow;

/// Identity of the EIP-712 signing domain.
///
/// Both values must match the constants compiled into the verifying contract,
/// otherwise every voucher is rejected on redemption.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct MinterConfig {
    /// EIP-712 domain name.
    pub domain_name: String,
    /// EIP-712 domain version.
    pub domain_version: String,
}

impl Default for MinterConfig {
    fn default() -> Self {
        Self {
            domain_name: SIGNING_DOMAIN_NAME.to_owned(),
            domain_version: SIGNING_DOMAIN_VERSION.to_owned(),
        }
    }
}

impl MinterConfig {
    /// Parses a configuration from TOML text.
    ///
    /// Missing keys fall back to the DBio defaults.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Builds the signing domain for a contract on a chain.
    pub fn domain(&self, verifying_contract: Address, chain_id: ChainId) -> Eip712Domain {
        Eip712Domain::new(
            Some(Cow::Owned(self.domain_name.clone())),
            Some(Cow::Owned(self.domain_version.clone())),
            Some(U256::from(chain_id)),
            Some(verifying_contract),
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use alloy_sol_types::eip712_domain;

    #[test]
    fn test_default_domain_matches_contract_constants() {
        let contract = address!("5FbDB2315678afecb367f032d93F642f64180aa3");
        let domain = MinterConfig::default().domain(contract, 31337);

        let expected = eip712_domain! {
            name: "DBio",
            version: "1",
            chain_id: 31337,
            verifying_contract: contract,
        };
        assert_eq!(domain, expected);
        assert_eq!(domain.separator(), expected.separator());
    }

    #[test]
    fn test_domain_binds_chain_and_contract() {
        let config = MinterConfig::default();
        let a = address!("5FbDB2315678afecb367f032d93F642f64180aa3");
        let b = address!("e7f1725E7734CE288F8367e1Bb143E90bb3F0512");

        assert_ne!(config.domain(a, 1).separator(), config.domain(a, 5).separator());
        assert_ne!(config.domain(a, 1).separator(), config.domain(b, 1).separator());
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_from_toml_str() {
        let config = MinterConfig::from_toml_str("domain_version = \"2\"").unwrap();
        assert_eq!(config.domain_name, "DBio");
        assert_eq!(config.domain_version, "2");

        assert!(MinterConfig::from_toml_str("domain_salt = \"x\"").is_err());
    }
}
