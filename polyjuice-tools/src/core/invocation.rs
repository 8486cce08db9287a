// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/polyjuice-tools/blob/main/licenses/COPYRIGHT.md

//! Invocation of deployed contracts, by method name.

use alloy::{
    dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt},
    json_abi::{Function, StateMutability},
    network::TransactionBuilder,
    primitives::{Address, TxHash},
    providers::{Provider, WalletProvider},
    rpc::types::{TransactionReceipt, TransactionRequest},
};

use crate::{
    core::{chain::ChainConfig, registry::AbiRegistry},
    utils::color::DebugColor,
};

#[derive(Debug, thiserror::Error)]
pub enum InvocationError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("no method named {name} in the registered abis")]
    UnknownMethod { name: String },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("abi error: {0}")]
    Abi(#[from] alloy::dyn_abi::Error),
    #[error("tx failed to complete")]
    FailedToComplete,
    #[error("tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
}

/// An encoded method call, ready to be read or sent.
#[derive(Debug)]
pub struct InvocationRequest {
    function: Function,
    calldata: Vec<u8>,
}

impl InvocationRequest {
    /// Looks up `method` in the registry and encodes `args` against its
    /// inputs.
    pub fn new(
        registry: &AbiRegistry,
        method: &str,
        args: &[String],
    ) -> Result<Self, InvocationError> {
        let function = registry
            .function_by_name(method)
            .ok_or_else(|| InvocationError::UnknownMethod {
                name: method.to_owned(),
            })?;
        if args.len() != function.inputs.len() {
            return Err(InvocationError::InvalidArgument(format!(
                "{} takes {} argument(s); got {}",
                function.name,
                function.inputs.len(),
                args.len(),
            )));
        }
        let values = crate::core::registry::coerce_args(&function.inputs, args)
            .map_err(|err| InvocationError::InvalidArgument(err.to_string()))?;
        let calldata = function.abi_encode_input(&values)?;
        Ok(Self {
            function: function.clone(),
            calldata,
        })
    }

    pub fn function(&self) -> &Function {
        &self.function
    }

    pub fn calldata(&self) -> &[u8] {
        &self.calldata
    }

    /// Reads the contract without a transaction and decodes the outputs.
    pub async fn call(
        &self,
        to: Address,
        provider: &impl Provider,
    ) -> Result<Vec<DynSolValue>, InvocationError> {
        if !matches!(
            self.function.state_mutability,
            StateMutability::Pure | StateMutability::View
        ) {
            warn!(@yellow, "method {} is not read-only; a call will not persist its effects", self.function.name);
        }
        let tx = TransactionRequest::default()
            .with_to(to)
            .with_input(self.calldata.clone());
        let output = provider.call(tx).await?;
        let values = self.function.abi_decode_output(&output)?;
        Ok(values)
    }

    /// Submits the call as a signed transaction and waits for its receipt.
    pub async fn send(
        &self,
        to: Address,
        chain: &ChainConfig,
        provider: &(impl Provider + WalletProvider),
    ) -> Result<TransactionReceipt, InvocationError> {
        let from = provider.default_signer_address();
        let tx = TransactionRequest::default()
            .with_from(from)
            .with_to(to)
            .with_input(self.calldata.clone())
            .with_gas_limit(chain.gas_limit)
            .with_gas_price(chain.gas_price);

        let pending = provider.send_transaction(tx).await?;
        let tx_hash = *pending.tx_hash();
        info!(@grey, "transaction hash: {}", tx_hash.debug_lavender());

        let receipt = pending
            .get_receipt()
            .await
            .or(Err(InvocationError::FailedToComplete))?;
        if !receipt.status() {
            return Err(InvocationError::Reverted { tx_hash });
        }
        Ok(receipt)
    }
}

/// Renders a decoded ABI value for console output.
pub fn format_value(value: &DynSolValue) -> String {
    match value {
        DynSolValue::Address(address) => address.to_string(),
        DynSolValue::Bool(value) => value.to_string(),
        DynSolValue::Uint(value, _) => value.to_string(),
        DynSolValue::Int(value, _) => value.to_string(),
        DynSolValue::String(value) => value.clone(),
        DynSolValue::Bytes(bytes) => format!("0x{}", hex::encode(bytes)),
        DynSolValue::FixedBytes(bytes, size) => format!("0x{}", hex::encode(&bytes[..*size])),
        DynSolValue::Array(values) | DynSolValue::FixedArray(values) | DynSolValue::Tuple(values) => {
            let inner: Vec<String> = values.iter().map(format_value).collect();
            format!("({})", inner.join(", "))
        }
        other => format!("{other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{
        json_abi::JsonAbi,
        primitives::{address, U256},
    };

    fn registry() -> AbiRegistry {
        let abi: JsonAbi = serde_json::from_str(
            r#"[
                {
                    "type": "function",
                    "name": "approve",
                    "stateMutability": "nonpayable",
                    "inputs": [
                        { "name": "spender", "type": "address" },
                        { "name": "amount", "type": "uint256" }
                    ],
                    "outputs": [{ "name": "", "type": "bool" }]
                },
                {
                    "type": "function",
                    "name": "name",
                    "stateMutability": "view",
                    "inputs": [],
                    "outputs": [{ "name": "", "type": "string" }]
                }
            ]"#,
        )
        .unwrap();
        let mut registry = AbiRegistry::new();
        registry.register(&abi);
        registry
    }

    #[test]
    fn encodes_method_call_with_selector() {
        let registry = registry();
        let req = InvocationRequest::new(
            &registry,
            "approve",
            &[
                "0x000000000000000000000000000000000000dEaD".to_owned(),
                "1".to_owned(),
            ],
        )
        .unwrap();

        assert_eq!(&req.calldata()[..4], [0x09, 0x5e, 0xa7, 0xb3]);
        // selector + two words
        assert_eq!(req.calldata().len(), 4 + 64);
    }

    #[test]
    fn unknown_method_is_an_error() {
        let registry = registry();
        let err = InvocationRequest::new(&registry, "transfer", &[]).unwrap_err();
        assert!(matches!(err, InvocationError::UnknownMethod { .. }));
    }

    #[test]
    fn argument_count_must_match() {
        let registry = registry();
        let err = InvocationRequest::new(&registry, "approve", &["1".to_owned()]).unwrap_err();
        assert!(matches!(err, InvocationError::InvalidArgument(_)));
    }

    #[test]
    fn malformed_argument_is_rejected() {
        let registry = registry();
        let err = InvocationRequest::new(
            &registry,
            "approve",
            &["nope".to_owned(), "1".to_owned()],
        )
        .unwrap_err();
        assert!(matches!(err, InvocationError::InvalidArgument(_)));
    }

    #[test]
    fn formats_decoded_values() {
        assert_eq!(
            format_value(&DynSolValue::Address(address!(
                "000000000000000000000000000000000000dEaD"
            ))),
            "0x000000000000000000000000000000000000dEaD"
        );
        assert_eq!(
            format_value(&DynSolValue::Uint(U256::from(42u64), 256)),
            "42"
        );
        assert_eq!(
            format_value(&DynSolValue::String("Slammie".to_owned())),
            "Slammie"
        );
        assert_eq!(
            format_value(&DynSolValue::Tuple(vec![
                DynSolValue::Bool(true),
                DynSolValue::Bytes(vec![0xab, 0xcd]),
            ])),
            "(true, 0xabcd)"
        );
    }
}
