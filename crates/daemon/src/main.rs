// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! herdd: keeps a herd of agents in step with the resource inventory and
//! lets an operator talk to one of them.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use herd_daemon::{startup, Config};
use tokio::io::BufReader;

#[derive(Debug, Parser)]
#[command(name = "herdd", version, about = "Resource herd daemon")]
struct Args {
    /// Config file (overrides HERD_CONFIG and the default location)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref()).context("loading configuration")?;
    let _log_guard = herd_daemon::logging::init(&config.log).context("initializing logging")?;

    let daemon = startup(&config).await.context("starting daemon")?;
    let console = daemon.console();
    let mut stdout = tokio::io::stdout();

    let result = tokio::select! {
        result = console.run(BufReader::new(tokio::io::stdin()), &mut stdout) => {
            result.context("console i/o")
        }
        _ = tokio::signal::ctrl_c() => Ok(()),
    };

    daemon.shutdown().await;
    result
}
