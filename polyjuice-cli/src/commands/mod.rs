// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/polyjuice-tools/blob/main/licenses/COPYRIGHT.md

use crate::error::PolyjuiceCliResult;

mod call;
mod deploy;
mod send;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Deploy a compiled contract
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// Call a read-only contract method
    #[clap(visible_alias = "c")]
    Call(call::Args),
    /// Send a state-mutating contract transaction
    #[clap(visible_alias = "s")]
    Send(send::Args),
}

pub async fn exec(cmd: Command) -> PolyjuiceCliResult {
    match cmd {
        Command::Deploy(args) => deploy::exec(args).await,
        Command::Call(args) => call::exec(args).await,
        Command::Send(args) => send::exec(args).await,
    }
}
