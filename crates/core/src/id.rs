// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identifier types.
//!
//! Resource ids are assigned by the remote inventory (typically an ARN) and
//! are opaque to the engine. Instance tokens are minted locally, one per agent
//! incarnation, so callers can tell an updated agent from a recreated one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Define a newtype ID wrapper around `SmolStr` for externally assigned ids.
///
/// Generates `new()`, `as_str()`, `short()`, `Display`, `From<String>`,
/// `From<&str>`, `PartialEq<str>`, `Borrow<str>` and `Deref` so the id can be
/// used directly as a `HashMap` key looked up by `&str`.
///
/// ```ignore
/// define_id! {
///     /// Doc comment for the ID type.
///     pub struct ResourceId;
/// }
/// ```
#[macro_export]
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        pub struct $name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub smol_str::SmolStr);

        impl $name {
            pub fn new(id: impl Into<smol_str::SmolStr>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Trailing `n` bytes of the id; ARNs share long prefixes.
            pub fn short(&self, n: usize) -> &str {
                let s = self.as_str();
                let mut start = s.len().saturating_sub(n);
                while !s.is_char_boundary(start) {
                    start += 1;
                }
                &s[start..]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }
    };
}

crate::define_id! {
    /// Globally unique identifier of a remote resource, stable across polls.
    pub struct ResourceId;
}

/// Opaque token identifying one agent incarnation.
///
/// A fresh token is minted every time the reconciler creates an agent, so an
/// agent that is updated in place keeps its token while a destroyed and
/// recreated one does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceToken(uuid::Uuid);

impl InstanceToken {
    pub fn mint() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl fmt::Display for InstanceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
