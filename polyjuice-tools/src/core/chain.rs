// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/polyjuice-tools/blob/main/licenses/COPYRIGHT.md

/// Gas budget for deployment transactions on the fee-subsidized test networks.
pub const DEFAULT_DEPLOY_GAS_LIMIT: u64 = 6_000_000;

/// Gas budget for contract invocations.
pub const DEFAULT_INVOKE_GAS_LIMIT: u64 = 0x54d30;

/// Polyjuice test networks subsidize fees, so transactions carry a zero price.
pub const DEFAULT_GAS_PRICE: u128 = 0;

#[derive(Debug, Clone, Copy)]
pub struct ChainConfig {
    pub gas_limit: u64,
    pub gas_price: u128,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            gas_limit: DEFAULT_DEPLOY_GAS_LIMIT,
            gas_price: DEFAULT_GAS_PRICE,
        }
    }
}

impl ChainConfig {
    /// Budget for calling into an already deployed contract.
    pub fn for_invocation() -> Self {
        Self {
            gas_limit: DEFAULT_INVOKE_GAS_LIMIT,
            gas_price: DEFAULT_GAS_PRICE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_budget_matches_deployments() {
        let config = ChainConfig::default();
        assert_eq!(config.gas_limit, 6_000_000);
        assert_eq!(config.gas_price, 0);
    }

    #[test]
    fn invocation_budget_is_smaller() {
        let config = ChainConfig::for_invocation();
        assert_eq!(config.gas_limit, 347_440);
        assert_eq!(config.gas_price, 0);
    }
}
