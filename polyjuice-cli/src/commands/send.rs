// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/polyjuice-tools/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Address;
use polyjuice_tools::core::{
    artifact::CompiledArtifact,
    chain::{self, ChainConfig},
    deployment::print_receipt,
    invocation::InvocationRequest,
    network,
    registry::AbiRegistry,
};

use crate::{
    common_args::{ArtifactArgs, AuthArgs, ProviderArgs},
    error::PolyjuiceCliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Name of the compiled contract artifact.
    contract: String,
    /// Method to invoke.
    method: String,
    /// Method arguments.
    args: Vec<String>,
    /// Address of the deployed contract.
    #[arg(long, env = "DEPLOYED_CONTRACT_ADDRESS")]
    address: Address,
    /// Gas budget for the transaction.
    #[arg(long, default_value_t = chain::DEFAULT_INVOKE_GAS_LIMIT)]
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
    let artifact = CompiledArtifact::load(&args.artifacts.artifacts_dir, &args.contract)?;

    network::check_endpoint(&args.provider.endpoint)?;
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;

    let mut registry = AbiRegistry::new();
    registry.register(&artifact.abi);

    log::info!("calling {}.{}...", artifact.contract_name, args.method);
    let request = InvocationRequest::new(&registry, &args.method, &args.args)?;
    let chain = ChainConfig {
        gas_limit: args.gas_limit,
        gas_price: args.gas_price,
    };
    let receipt = request.send(args.address, &chain, &provider).await?;
    print_receipt(&receipt);
    Ok(())
}
