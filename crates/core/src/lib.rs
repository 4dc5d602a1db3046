// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! herd-core: shared data model for the herd agent visualizer

pub mod macros;

pub mod conversation;
pub mod cost;
pub mod geometry;
pub mod id;
pub mod load;
pub mod resource;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use conversation::{ConversationTurn, Role};
pub use cost::{nameplate, CostDisplay, CostView};
pub use geometry::{Rect, Vec2};
pub use id::{InstanceToken, ResourceId};
pub use load::LoadLevel;
pub use resource::{sanitize_cost, ResourceRecord, ResourceState, ResourceType};
