// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/polyjuice-tools/blob/main/licenses/COPYRIGHT.md

//! Tools for deploying and invoking contracts on Godwoken Polyjuice chains.
//!
//! The Godwoken web3 node translates Ethereum JSON-RPC onto the underlying
//! rollup account model, so everything here speaks plain Ethereum semantics
//! through [`alloy`] and leaves the account abstraction to the remote shim.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod utils;

pub use error::{Error, Result};
