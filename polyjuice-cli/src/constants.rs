// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/polyjuice-tools/blob/main/licenses/COPYRIGHT.md

/// The default endpoint for connections to a Godwoken web3 node.
pub const DEFAULT_ENDPOINT: &str = "https://godwoken-testnet-web3-rpc.ckbapp.dev";
