// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/polyjuice-tools/blob/main/licenses/COPYRIGHT.md

use crate::utils::color::Color;

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("unsupported web3 endpoint {}\nonly http(s) urls are accepted", .endpoint.red())]
    UnsupportedEndpoint { endpoint: String },
}

pub fn check_endpoint(endpoint: &str) -> Result<(), NetworkError> {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Ok(())
    } else {
        Err(NetworkError::UnsupportedEndpoint {
            endpoint: endpoint.to_owned(),
        })
    }
}
