//! Layout and result containers.

use crate::energy::Energy;
use crate::error::PlaceError;
use lodestone_common::Vec2;
use lodestone_graph::{Circuit, ComponentId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An assignment of grid positions to every component of a circuit.
///
/// Positions are stored in a vector indexed by each component's stable slot
/// (its [`ComponentId`]), the same length as the circuit's component vector.
/// The circuit itself is shared immutably; cloning a layout copies only the
/// position table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Position of each component, indexed by component slot.
    pub positions: Vec<Vec2>,
}

impl Layout {
    /// Creates a layout from a slot-indexed position table.
    pub fn new(positions: Vec<Vec2>) -> Self {
        Self { positions }
    }

    /// Returns the position assigned to a component, if the slot is covered.
    pub fn position(&self, id: ComponentId) -> Option<Vec2> {
        self.positions.get(id.as_slot()).copied()
    }

    /// Checks that this layout covers every component of the circuit.
    ///
    /// A missing entry is a consistency error, never silently defaulted.
    pub fn validate(&self, circuit: &Circuit) -> Result<(), PlaceError> {
        if self.positions.len() != circuit.component_count() {
            return Err(PlaceError::PositionCountMismatch {
                positions: self.positions.len(),
                components: circuit.component_count(),
            });
        }
        Ok(())
    }
}

/// The outcome of one optimization run.
///
/// Immutable after return: the best layout found, its energy, and periodic
/// snapshots of the best layout keyed by outer-iteration index, supporting
/// progressive replay of convergence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutResult {
    /// The best layout found over the whole run.
    pub best: Layout,
    /// The energy of [`best`](Self::best).
    pub best_energy: Energy,
    /// Snapshots of the best layout, keyed by outer-iteration index.
    pub history: BTreeMap<usize, Layout>,
}
