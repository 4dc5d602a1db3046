// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Adapters for the external collaborators of the herd engine: the resource
//! inventory, the chat service and the bounds used to pick destinations.

pub mod bounds;
pub mod chat;
pub mod inventory;

pub use bounds::{BoundsError, BoundsProvider, RectBounds, WaypointBounds};
pub use chat::{ChatError, ChatProvider, MockChat};
pub use inventory::{
    decode_instances, FileInventory, InventoryError, InventoryProvider, MockInventory,
};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use bounds::FakeBounds;
#[cfg(any(test, feature = "test-support"))]
pub use chat::{ChatCall, FakeChat};
#[cfg(any(test, feature = "test-support"))]
pub use inventory::FakeInventory;
