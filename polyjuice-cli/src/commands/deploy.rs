// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/polyjuice-tools/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Address;
use polyjuice_tools::core::{
    artifact::{self, CompiledArtifact},
    chain::{self, ChainConfig},
    deployment::{self, DeploymentConfig},
    network,
    registry::AbiRegistry,
};

use crate::{
    common_args::{ArtifactArgs, AuthArgs, ProviderArgs},
    error::PolyjuiceCliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Name of the compiled contract to deploy.
    contract: Option<String>,
    /// Treasury address handed to the constructor.
    #[arg(long, env = "TREASURY_ADDRESS")]
    treasury: Option<Address>,
    /// Gas budget for the deployment transaction.
    #[arg(long, default_value_t = chain::DEFAULT_DEPLOY_GAS_LIMIT)]
    gas_limit: u64,
    /// Gas price in wei; the test networks subsidize fees.
    #[arg(long, default_value_t = chain::DEFAULT_GAS_PRICE)]
    gas_price: u128,

    #[command(flatten)]
    artifacts: ArtifactArgs,
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> PolyjuiceCliResult {
    let name = artifact::resolve_contract_name(args.contract.as_deref())?;
    let artifact = CompiledArtifact::load(&args.artifacts.artifacts_dir, name)?;

    network::check_endpoint(&args.provider.endpoint)?;
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;

    let mut registry = AbiRegistry::new();
    registry.register(&artifact.abi);
    log::debug!(
        "registered {} abi function(s) for {}",
        registry.len(),
        artifact.contract_name
    );

    let constructor_args = match (&args.treasury, &artifact.abi.constructor) {
        (Some(treasury), Some(_)) => vec![treasury.to_string()],
        _ => Vec::new(),
    };
    let config = DeploymentConfig {
        chain: ChainConfig {
            gas_limit: args.gas_limit,
            gas_price: args.gas_price,
        },
        constructor_args,
    };
    deployment::deploy(&artifact, &config, &provider).await?;
    Ok(())
}
