// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/polyjuice-tools/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

pub type PolyjuiceCliResult = Result<(), PolyjuiceCliError>;

#[derive(Debug)]
pub struct PolyjuiceCliError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl PolyjuiceCliError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for PolyjuiceCliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for PolyjuiceCliError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for PolyjuiceCliError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<polyjuice_tools::Error> for PolyjuiceCliError {
    fn from(err: polyjuice_tools::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<polyjuice_tools::core::artifact::ArtifactError> for PolyjuiceCliError {
    fn from(err: polyjuice_tools::core::artifact::ArtifactError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<polyjuice_tools::core::config::ConfigError> for PolyjuiceCliError {
    fn from(err: polyjuice_tools::core::config::ConfigError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<polyjuice_tools::core::network::NetworkError> for PolyjuiceCliError {
    fn from(err: polyjuice_tools::core::network::NetworkError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<polyjuice_tools::core::deployment::DeploymentError> for PolyjuiceCliError {
    fn from(err: polyjuice_tools::core::deployment::DeploymentError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<polyjuice_tools::core::invocation::InvocationError> for PolyjuiceCliError {
    fn from(err: polyjuice_tools::core::invocation::InvocationError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}
