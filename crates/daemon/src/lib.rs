// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! herd daemon library
//!
//! Configuration, logging and startup wiring for the `herdd` binary, plus
//! the operator console.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod console;
pub mod env;
pub mod inventory;
pub mod lifecycle;
pub mod logging;

pub use console::{parse, Command, Console, Next, ParseError};
pub use inventory::DaemonInventory;
pub use lifecycle::{startup, Config, Daemon, LifecycleError};
