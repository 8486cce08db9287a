// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/polyjuice-tools/blob/main/licenses/COPYRIGHT.md

//! Selector-indexed view over contract ABIs.
//!
//! The web3 shim must know every ABI that may show up in a transaction so it
//! can rewrite calldata for the rollup account model. Registering each
//! artifact's ABI up front keeps function lookup and calldata decoding
//! possible no matter which contract a call dispatches to.

use std::collections::HashMap;

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::{Function, JsonAbi, Param},
    primitives::Selector,
};
use eyre::WrapErr;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("calldata shorter than a function selector")]
    TruncatedCalldata,
    #[error("no registered function with selector {selector}")]
    UnknownSelector { selector: Selector },
    #[error("abi decoding error: {0}")]
    Decode(#[from] alloy::dyn_abi::Error),
}

#[derive(Debug, Default)]
pub struct AbiRegistry {
    functions: HashMap<Selector, Function>,
}

impl AbiRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every function of `abi`, replacing earlier entries on
    /// selector collision.
    pub fn register(&mut self, abi: &JsonAbi) {
        for function in abi.functions() {
            self.functions.insert(function.selector(), function.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn function_by_selector(&self, selector: Selector) -> Option<&Function> {
        self.functions.get(&selector)
    }

    pub fn function_by_name(&self, name: &str) -> Option<&Function> {
        self.functions.values().find(|function| function.name == name)
    }

    /// Decodes full calldata into the registered function and its arguments.
    pub fn decode_calldata(
        &self,
        data: &[u8],
    ) -> Result<(&Function, Vec<DynSolValue>), RegistryError> {
        if data.len() < 4 {
            return Err(RegistryError::TruncatedCalldata);
        }
        let selector = Selector::from_slice(&data[..4]);
        let function = self
            .function_by_selector(selector)
            .ok_or(RegistryError::UnknownSelector { selector })?;
        let values = function.abi_decode_input(&data[4..])?;
        Ok((function, values))
    }
}

/// Coerces string arguments against their ABI parameter types.
pub fn coerce_args(params: &[Param], args: &[String]) -> eyre::Result<Vec<DynSolValue>> {
    let mut values = Vec::with_capacity(args.len());
    for (arg, param) in args.iter().zip(params.iter()) {
        let ty = param
            .resolve()
            .wrap_err_with(|| format!("could not resolve parameter: {param}"))?;
        let value = ty
            .coerce_str(arg)
            .wrap_err_with(|| format!("could not parse argument for {param}: {arg}"))?;
        values.push(value);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, U256};

    fn erc20_abi() -> JsonAbi {
        serde_json::from_str(
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
        .unwrap()
    }

    #[test]
    fn registers_functions_by_selector() {
        let mut registry = AbiRegistry::new();
        registry.register(&erc20_abi());
        assert_eq!(registry.len(), 2);

        let approve = registry.function_by_name("approve").unwrap();
        // keccak("approve(address,uint256)")[..4]
        assert_eq!(approve.selector(), Selector::from([0x09, 0x5e, 0xa7, 0xb3]));
        assert!(registry.function_by_selector(approve.selector()).is_some());
        assert!(registry.function_by_name("transfer").is_none());
    }

    #[test]
    fn decodes_registered_calldata() {
        let mut registry = AbiRegistry::new();
        registry.register(&erc20_abi());

        let spender = address!("000000000000000000000000000000000000dEaD");
        let function = registry.function_by_name("approve").unwrap();
        let calldata = function
            .abi_encode_input(&[
                DynSolValue::Address(spender),
                DynSolValue::Uint(U256::from(1u64), 256),
            ])
            .unwrap();

        let (decoded, values) = registry.decode_calldata(&calldata).unwrap();
        assert_eq!(decoded.name, "approve");
        assert_eq!(values[0], DynSolValue::Address(spender));
    }

    #[test]
    fn unknown_selector_is_an_error() {
        let registry = AbiRegistry::new();
        let err = registry.decode_calldata(&[0xde, 0xad, 0xbe, 0xef]).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownSelector { .. }));
        assert!(matches!(
            registry.decode_calldata(&[0x01]).unwrap_err(),
            RegistryError::TruncatedCalldata
        ));
    }

    #[test]
    fn coerces_string_args_to_abi_values() {
        let abi = erc20_abi();
        let approve = abi.function("approve").unwrap().first().unwrap();
        let values = coerce_args(
            &approve.inputs,
            &[
                "0x000000000000000000000000000000000000dEaD".to_owned(),
                "1".to_owned(),
            ],
        )
        .unwrap();
        assert_eq!(values.len(), 2);

        let err = coerce_args(&approve.inputs, &["not-an-address".to_owned(), "1".to_owned()]);
        assert!(err.is_err());
    }
}
