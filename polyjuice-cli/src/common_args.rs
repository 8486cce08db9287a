// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/polyjuice-tools/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use alloy::{
    network::EthereumWallet,
    primitives::{FixedBytes, B256},
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::{local::PrivateKeySigner, Signer},
};
use eyre::{bail, eyre, Context};
use polyjuice_tools::core::{
    artifact::DEFAULT_ARTIFACTS_DIR,
    config::{ConfigError, PolyjuiceConfig},
};

use crate::{constants::DEFAULT_ENDPOINT, utils::decode0x};

#[derive(Debug, clap::Args)]
pub struct ArtifactArgs {
    /// Directory holding the compiled contract artifacts.
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,
}

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long, env = "DEPLOYER_PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
}

impl AuthArgs {
    fn build_wallet(&self, chain_id: u64) -> eyre::Result<EthereumWallet> {
        let key = if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            key.clone()
        } else if let Some(file) = &self.private_key_path {
            fs::read_to_string(file).wrap_err("could not open private key file")?
        } else {
            bail!("no deployer key: set DEPLOYER_PRIVATE_KEY or pass --private-key");
        };

        let key_bytes = decode0x(key)?;
        if key_bytes.len() != 32 {
            bail!("private key must be 32 bytes; got {}", key_bytes.len());
        }
        let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(&key_bytes);
        let signer = PrivateKeySigner::from_bytes(&priv_key_bytes)?.with_chain_id(Some(chain_id));
        Ok(EthereumWallet::new(signer))
    }
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// Godwoken web3 RPC endpoint
    #[arg(short, long, env = "WEB3_PROVIDER_URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
    /// Rollup type hash of the target chain, forwarded to the web3 shim
    #[arg(long, env = "ROLLUP_TYPE_HASH")]
    pub rollup_type_hash: Option<B256>,
    /// ETH account lock code hash of the target chain
    #[arg(long, env = "ETH_ACCOUNT_LOCK_CODE_HASH")]
    pub eth_account_lock_code_hash: Option<B256>,
}

impl ProviderArgs {
    pub fn config(&self) -> Result<PolyjuiceConfig, ConfigError> {
        let config = PolyjuiceConfig::builder()
            .web3_url(self.endpoint.clone())
            .rollup_type_hash(self.rollup_type_hash)
            .eth_account_lock_code_hash(self.eth_account_lock_code_hash)
            .build();
        config.validate()?;
        Ok(config)
    }

    pub async fn build_provider(&self) -> eyre::Result<impl Provider> {
        let config = self.config()?;
        if let Some(hash) = config.rollup_type_hash {
            log::debug!("rollup type hash: {hash}");
        }
        if let Some(hash) = config.eth_account_lock_code_hash {
            log::debug!("eth account lock code hash: {hash}");
        }
        let provider = ProviderBuilder::new().connect(&config.web3_url).await?;
        Ok(provider)
    }

    pub async fn build_provider_with_wallet(
        &self,
        auth: &AuthArgs,
    ) -> eyre::Result<impl Provider + WalletProvider> {
        let provider = self.build_provider().await?;
        let chain_id = provider.get_chain_id().await?;
        let wallet = auth.build_wallet(chain_id)?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(&self.endpoint)
            .await?;
        Ok(provider)
    }
}
