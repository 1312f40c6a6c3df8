//! Opaque ID newtype for placement-graph components.
//!
//! [`ComponentId`] is a thin `u32` wrapper used as an arena index into a
//! [`Circuit`](crate::data::Circuit)'s component vector. IDs are assigned
//! sequentially at insertion, are stable for the lifetime of one circuit,
//! and are never reused or recomputed.

use serde::{Deserialize, Serialize};

/// Opaque, copyable ID for a component in a placement circuit.
///
/// Doubles as the component's stable slot index, so position tables can be
/// plain vectors instead of string-keyed maps.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ComponentId(u32);

impl ComponentId {
    /// Creates an ID from a raw `u32` index.
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw `u32` index.
    pub fn as_raw(self) -> u32 {
        self.0
    }

    /// Returns the ID as a `usize` slot index.
    pub fn as_slot(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
