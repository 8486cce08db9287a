// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/polyjuice-tools/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.
//!
//! A deployment runs one sequential chain of remote calls: balance preflight,
//! transaction submission, receipt wait. Nothing is retried; any failure ends
//! the run.

use alloy::{
    consensus::TxReceipt as _,
    dyn_abi::JsonAbiExt,
    network::TransactionBuilder,
    primitives::{Address, TxHash, U256},
    providers::{Provider, WalletProvider},
    rpc::types::{TransactionReceipt, TransactionRequest},
};

use crate::{
    core::{artifact::CompiledArtifact, chain::ChainConfig, registry},
    utils::color::{Color, DebugColor},
};

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("failed to get balance")]
    FailedToGetBalance,
    #[error(
        "insufficient balance, can't deploy contract\n\
         please deposit funds to your ethereum address: {}",
        .address.red(),
    )]
    InsufficientBalance { address: Address },
    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
    #[error("tx failed to complete")]
    FailedToComplete,
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("no contract address in receipt")]
    NoContractAddress,
    #[error("unexpected {event} event while {state}")]
    UnexpectedEvent {
        event: &'static str,
        state: &'static str,
    },
}

/// Parameters of one deployment attempt.
#[derive(Debug, Default)]
pub struct DeploymentConfig {
    pub chain: ChainConfig,
    pub constructor_args: Vec<String>,
}

/// Lifecycle of a submitted deployment.
///
/// The transaction hash and the receipt are each observed at most once, in
/// that order; failures travel on the `Err` channel instead of a state.
#[derive(Debug)]
pub enum DeploymentStatus {
    Pending,
    Submitted(TxHash),
    Confirmed(Box<TransactionReceipt>),
}

impl DeploymentStatus {
    pub fn submitted(self, tx_hash: TxHash) -> Result<Self, DeploymentError> {
        match self {
            Self::Pending => Ok(Self::Submitted(tx_hash)),
            state => Err(DeploymentError::UnexpectedEvent {
                event: "transaction hash",
                state: state.name(),
            }),
        }
    }

    pub fn confirmed(self, receipt: TransactionReceipt) -> Result<Self, DeploymentError> {
        match self {
            Self::Submitted(_) => Ok(Self::Confirmed(Box::new(receipt))),
            state => Err(DeploymentError::UnexpectedEvent {
                event: "receipt",
                state: state.name(),
            }),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Submitted(_) => "submitted",
            Self::Confirmed(_) => "confirmed",
        }
    }
}

/// Produced exactly once per successful run.
#[derive(Debug)]
pub struct DeploymentOutcome {
    pub contract_address: Address,
    pub transaction_hash: TxHash,
    pub receipt: TransactionReceipt,
}

/// A create transaction carrying the contract init code.
#[derive(Debug)]
pub struct DeploymentRequest {
    tx: TransactionRequest,
}

impl DeploymentRequest {
    pub fn new(sender: Address, init_code: Vec<u8>, chain: &ChainConfig) -> Self {
        Self {
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_deploy_code(init_code)
                .with_gas_limit(chain.gas_limit)
                .with_gas_price(chain.gas_price),
        }
    }

    /// Submits the transaction and waits for its inclusion.
    pub async fn exec(
        self,
        provider: &impl Provider,
    ) -> Result<DeploymentOutcome, DeploymentError> {
        let status = DeploymentStatus::Pending;

        let pending = provider.send_transaction(self.tx).await?;
        let tx_hash = *pending.tx_hash();
        let status = status.submitted(tx_hash)?;
        info!(@grey, "transaction hash: {}", tx_hash.debug_lavender());

        let receipt = pending
            .get_receipt()
            .await
            .or(Err(DeploymentError::FailedToComplete))?;
        if !receipt.status() {
            return Err(DeploymentError::Reverted { tx_hash });
        }
        let status = status.confirmed(receipt)?;

        let DeploymentStatus::Confirmed(receipt) = status else {
            return Err(DeploymentError::FailedToComplete);
        };
        let receipt = *receipt;
        print_receipt(&receipt);

        let contract_address = receipt
            .contract_address
            .ok_or(DeploymentError::NoContractAddress)?;
        Ok(DeploymentOutcome {
            contract_address,
            transaction_hash: tx_hash,
            receipt,
        })
    }
}

/// Builds the init code: artifact bytecode followed by the ABI-encoded
/// constructor arguments.
pub fn init_code(
    artifact: &CompiledArtifact,
    constructor_args: &[String],
) -> Result<Vec<u8>, DeploymentError> {
    let mut code = artifact.bytecode.to_vec();
    match &artifact.abi.constructor {
        None => {
            if !constructor_args.is_empty() {
                return Err(DeploymentError::InvalidConstructor(format!(
                    "{} has no constructor; got {} argument(s)",
                    artifact.contract_name,
                    constructor_args.len(),
                )));
            }
        }
        Some(constructor) => {
            if constructor_args.len() != constructor.inputs.len() {
                return Err(DeploymentError::InvalidConstructor(format!(
                    "mismatched number of constructor arguments (want {:?} ({}); got {})",
                    constructor.inputs,
                    constructor.inputs.len(),
                    constructor_args.len(),
                )));
            }
            let values = registry::coerce_args(&constructor.inputs, constructor_args)
                .map_err(|err| DeploymentError::InvalidConstructor(err.to_string()))?;
            let encoded = constructor
                .abi_encode_input_raw(&values)
                .map_err(|err| DeploymentError::InvalidConstructor(err.to_string()))?;
            code.extend(encoded);
        }
    }
    Ok(code)
}

/// Queries and reports the deployer balance. A zero balance aborts the run
/// before anything is submitted; a non-zero balance may still be too small
/// to cover gas, which surfaces from the submission itself.
pub async fn preflight_balance(
    address: Address,
    provider: &impl Provider,
) -> Result<U256, DeploymentError> {
    let balance = provider
        .get_balance(address)
        .await
        .map_err(|_| DeploymentError::FailedToGetBalance)?;
    greyln!("balance: {balance}");
    if balance.is_zero() {
        return Err(DeploymentError::InsufficientBalance { address });
    }
    Ok(balance)
}

/// Deploys a compiled contract and reports its lifecycle to the operator.
pub async fn deploy(
    artifact: &CompiledArtifact,
    config: &DeploymentConfig,
    provider: &(impl Provider + WalletProvider),
) -> Result<DeploymentOutcome, DeploymentError> {
    let from_address = provider.default_signer_address();
    debug!(@grey, "sender address: {}", from_address.debug_lavender());

    preflight_balance(from_address, provider).await?;

    greyln!("deploying contract {}...", artifact.contract_name);
    let code = init_code(artifact, &config.constructor_args)?;
    let req = DeploymentRequest::new(from_address, code, &config.chain);
    let outcome = req.exec(provider).await?;

    mintln!("Deployed contract address: {}", outcome.contract_address);
    Ok(outcome)
}

/// Prints every receipt field the operator cares about.
pub fn print_receipt(receipt: &TransactionReceipt) {
    greyln!("receipt:");
    greyln!("  transaction hash: {}", receipt.transaction_hash);
    greyln!("  transaction index: {}", fmt_option(receipt.transaction_index));
    greyln!("  block hash: {}", fmt_option(receipt.block_hash));
    greyln!("  block number: {}", fmt_option(receipt.block_number));
    greyln!("  from: {}", receipt.from);
    greyln!("  to: {}", fmt_option(receipt.to));
    greyln!("  gas used: {}", receipt.gas_used);
    greyln!("  cumulative gas used: {}", receipt.inner.cumulative_gas_used());
    greyln!("  contract address: {}", fmt_option(receipt.contract_address));
    greyln!("  status: {}", receipt.status());
}

fn fmt_option<T: std::fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "none".to_owned(),
    }
}
