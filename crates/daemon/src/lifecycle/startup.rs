// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon startup and shutdown.

use std::sync::Arc;

use herd_adapters::{
    BoundsError, BoundsProvider, FileInventory, InventoryProvider, MockChat, MockInventory,
    RectBounds, WaypointBounds,
};
use herd_engine::{
    AgentDeps, AgentDirectory, AgentFactory, ConversationSession, Reconciler, ReconcilerCommand,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::{BoundsConfig, Config, InventorySource, LifecycleError};
use crate::console::Console;
use crate::inventory::DaemonInventory;

/// Running daemon: a reconciler task plus the handles the console needs.
pub struct Daemon {
    pub config: Config,
    pub directory: AgentDirectory,
    pub session: Arc<ConversationSession<MockChat>>,
    pub commands: mpsc::Sender<ReconcilerCommand>,
    /// Present when the inventory source is the mock.
    pub mock: Option<MockInventory>,
    cancel: CancellationToken,
    reconciler: JoinHandle<()>,
}

/// Start the daemon
pub async fn startup(config: &Config) -> Result<Daemon, LifecycleError> {
    let bounds = bounds(&config.bounds)?;
    let deps = AgentDeps::new(config.behavior.clone(), bounds, config.cost.clone());

    let (inventory, mock, chat_source) = match config.inventory.source {
        InventorySource::Mock => {
            let mock = MockInventory::new(config.inventory_latency());
            (DaemonInventory::Mock(mock.clone()), Some(mock.clone()), mock)
        }
        InventorySource::File => {
            let path = config.inventory.path.clone().ok_or(LifecycleError::MissingInventoryPath)?;
            let file = FileInventory::new(path);
            // The mock chat answers from whatever the file lists at startup.
            let seed = match file.list().await {
                Ok(records) => records,
                Err(e) => {
                    warn!(error = %e, "inventory file unreadable at startup");
                    Vec::new()
                }
            };
            (DaemonInventory::File(file), None, MockInventory::with_records(seed, config.inventory_latency()))
        }
    };

    let reconciler =
        Reconciler::new(inventory, AgentFactory::with_defaults(), deps, config.reconciler.clone());
    let directory = reconciler.directory();
    let chat = MockChat::new(chat_source, config.chat_latency());
    let session = Arc::new(ConversationSession::new(chat, directory.clone()));

    let (commands, rx) = mpsc::channel(32);
    let cancel = CancellationToken::new();
    let reconciler = tokio::spawn(reconciler.run(rx, cancel.clone()));

    info!(
        source = ?config.inventory.source,
        poll_period_ms = config.reconciler.poll_period().as_millis() as u64,
        "herd started"
    );
    Ok(Daemon { config: config.clone(), directory, session, commands, mock, cancel, reconciler })
}

fn bounds(config: &BoundsConfig) -> Result<Arc<dyn BoundsProvider>, BoundsError> {
    if config.waypoints.is_empty() {
        Ok(Arc::new(RectBounds::new(config.rect())?))
    } else {
        Ok(Arc::new(WaypointBounds::new(config.waypoints.clone())?))
    }
}

impl Daemon {
    pub fn console(&self) -> Console<MockChat> {
        Console::new(
            self.directory.clone(),
            Arc::clone(&self.session),
            self.commands.clone(),
            self.mock.clone(),
            self.config.console.thinking_text.clone(),
        )
    }

    /// End any open session, stop the reconciler and wait for it to destroy
    /// its agents.
    pub async fn shutdown(self) {
        self.session.end_session();
        self.cancel.cancel();
        if let Err(e) = self.reconciler.await {
            warn!(error = %e, "reconciler task failed");
        }
        info!("herd stopped");
    }
}

#[cfg(test)]
#[path = "startup_tests.rs"]
mod tests;
