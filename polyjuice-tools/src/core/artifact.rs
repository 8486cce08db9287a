// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/polyjuice-tools/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! Artifacts are the Truffle-layout JSON files produced by the Solidity
//! compiler, located by convention as `<artifacts_dir>/<ContractName>.json`.

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use alloy::{json_abi::JsonAbi, primitives::Bytes};
use serde::Deserialize;

/// Where compiled contracts are placed by the build pipeline.
pub const DEFAULT_ARTIFACTS_DIR: &str = "build/contracts";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error(
        "no compiled contract specified to deploy\n\
         the contract must exist in {DEFAULT_ARTIFACTS_DIR} and its name must be provided as an argument"
    )]
    MissingContractName,
    #[error("unable to find contract file: {}", .path.display())]
    ArtifactNotFound { path: PathBuf },
    #[error("malformed contract file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Compiled contract output: its interface description and init bytecode.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledArtifact {
    pub contract_name: String,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

impl CompiledArtifact {
    /// Loads the artifact for `name` from `dir`.
    pub fn load(dir: impl AsRef<Path>, name: &str) -> Result<Self, ArtifactError> {
        let path = dir.as_ref().join(format!("{name}.json"));
        if !path.exists() {
            return Err(ArtifactError::ArtifactNotFound { path });
        }
        let file = File::open(&path)?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|source| ArtifactError::Malformed { path, source })
    }
}

/// Validates an optional contract name before any I/O happens.
pub fn resolve_contract_name(name: Option<&str>) -> Result<&str, ArtifactError> {
    match name {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(ArtifactError::MissingContractName),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLAMMIE_ARTIFACT: &str = r#"{
        "contractName": "Slammie",
        "abi": [
            {
                "type": "constructor",
                "stateMutability": "nonpayable",
                "inputs": [{ "name": "treasury", "type": "address" }]
            },
            {
                "type": "function",
                "name": "name",
                "stateMutability": "view",
                "inputs": [],
                "outputs": [{ "name": "", "type": "string" }]
            }
        ],
        "bytecode": "0x600a600c600039600a6000f3"
    }"#;

    fn write_artifact(dir: &Path, name: &str, contents: &str) {
        std::fs::write(dir.join(format!("{name}.json")), contents).unwrap();
    }

    #[test]
    fn loads_truffle_artifact() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "Slammie", SLAMMIE_ARTIFACT);

        let artifact = CompiledArtifact::load(dir.path(), "Slammie").unwrap();
        assert_eq!(artifact.contract_name, "Slammie");
        assert_eq!(artifact.bytecode.len(), 12);
        assert!(artifact.abi.constructor.is_some());
        assert!(artifact.abi.function("name").is_some());
    }

    #[test]
    fn missing_file_is_artifact_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = CompiledArtifact::load(dir.path(), "Slammie").unwrap_err();
        assert!(matches!(err, ArtifactError::ArtifactNotFound { .. }));
        assert!(err.to_string().contains("Slammie.json"));
    }

    #[test]
    fn malformed_json_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "Slammie", "{ not json");
        let err = CompiledArtifact::load(dir.path(), "Slammie").unwrap_err();
        assert!(matches!(err, ArtifactError::Malformed { .. }));
    }

    #[test]
    fn absent_name_is_rejected_before_io() {
        assert!(matches!(
            resolve_contract_name(None),
            Err(ArtifactError::MissingContractName)
        ));
        assert!(matches!(
            resolve_contract_name(Some("  ")),
            Err(ArtifactError::MissingContractName)
        ));
        assert_eq!(resolve_contract_name(Some("Slammie")).unwrap(), "Slammie");
    }
}
