// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/polyjuice-tools/blob/main/licenses/COPYRIGHT.md

//! Provider-shim configuration.

use alloy::primitives::B256;
use typed_builder::TypedBuilder;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no web3 provider url configured")]
    MissingWeb3Url,
}

/// Connection settings for a Godwoken web3 endpoint.
///
/// The rollup type hash and account lock code hash identify the target chain
/// to the web3 shim; recent nodes discover both themselves, so they are
/// optional here and only logged when present.
#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(default, setter(into)))]
pub struct PolyjuiceConfig {
    #[builder(!default)]
    pub web3_url: String,
    pub rollup_type_hash: Option<B256>,
    pub eth_account_lock_code_hash: Option<B256>,
}

impl PolyjuiceConfig {
    /// Fail-fast validation, run before any connection is attempted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.web3_url.trim().is_empty() {
            return Err(ConfigError::MissingWeb3Url);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::b256;

    #[test]
    fn builder_fills_optional_fields() {
        let config = PolyjuiceConfig::builder()
            .web3_url("https://godwoken-testnet-web3-rpc.ckbapp.dev")
            .rollup_type_hash(b256!(
                "4cc2e6526204ae6a2e8fcf12f7ad472f41a1606d5b9624beebd215d780809f6a"
            ))
            .build();
        config.validate().unwrap();
        assert!(config.rollup_type_hash.is_some());
        assert!(config.eth_account_lock_code_hash.is_none());
    }

    #[test]
    fn empty_url_is_rejected_eagerly() {
        let config = PolyjuiceConfig::builder().web3_url("  ").build();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingWeb3Url)
        ));
    }
}
