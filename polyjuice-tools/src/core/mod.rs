// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/polyjuice-tools/blob/main/licenses/COPYRIGHT.md

pub mod artifact;
pub mod chain;
pub mod config;
pub mod deployment;
pub mod invocation;
pub mod network;
pub mod registry;
