// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/polyjuice-tools/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Address;
use polyjuice_tools::core::{
    artifact::CompiledArtifact,
    invocation::{format_value, InvocationRequest},
    network,
    registry::AbiRegistry,
};

use crate::{
    common_args::{ArtifactArgs, ProviderArgs},
    error::PolyjuiceCliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Name of the compiled contract artifact.
    contract: String,
    /// Method to call.
    method: String,
    /// Method arguments.
    args: Vec<String>,
    /// Address of the deployed contract.
    #[arg(long, env = "DEPLOYED_CONTRACT_ADDRESS")]
    address: Address,

    #[command(flatten)]
    artifacts: ArtifactArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> PolyjuiceCliResult {
    let artifact = CompiledArtifact::load(&args.artifacts.artifacts_dir, &args.contract)?;

    network::check_endpoint(&args.provider.endpoint)?;
    let provider = args.provider.build_provider().await?;

    let mut registry = AbiRegistry::new();
    registry.register(&artifact.abi);

    log::info!("calling {}.{}...", artifact.contract_name, args.method);
    let request = InvocationRequest::new(&registry, &args.method, &args.args)?;
    let values = request.call(args.address, &provider).await?;
    for value in &values {
        println!("{}", format_value(value));
    }
    Ok(())
}
