//! The two-stage lexicographic energy model.
//!
//! Evaluates the quality of a layout. While any pair of component bounding
//! boxes intersects, the energy sits in the `Overlap` stage and its value is
//! the total intersection area; once the layout is overlap-free the energy
//! moves to the `WireLength` stage and its value is the sum of
//! `(dx² + dy²)²` over all connections. A higher stage always wins outright;
//! within a stage, lower value wins. Optimizing wire length while overlaps
//! remain would only make the overlaps worse, hence the hard staging.

use crate::error::PlaceError;
use crate::layout::Layout;
use lodestone_common::Vec2;
use lodestone_diagnostics::{Diagnostic, DiagnosticSink};
use lodestone_graph::{Circuit, PortRef};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Metropolis delta applied per stage step when two energies differ in
/// stage, independent of their numeric values. Large enough that stage
/// regressions are overwhelmingly rejected at any practical temperature.
pub const STAGE_PENALTY: f64 = 10_000.0;

/// The coarse-grained priority level of an energy value.
///
/// Ordered from worst to best by declaration: a layout that has reached
/// [`WireLength`](EnergyStage::WireLength) outranks any layout still in
/// [`Overlap`](EnergyStage::Overlap), regardless of numeric values.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum EnergyStage {
    /// At least one pair of component bounding boxes intersects.
    Overlap,
    /// The layout is overlap-free; the value measures wiring cost.
    WireLength,
}

impl fmt::Display for EnergyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnergyStage::Overlap => write!(f, "overlap"),
            EnergyStage::WireLength => write!(f, "wire-length"),
        }
    }
}

/// An energy value: a stage plus a numeric value (lower is better within a
/// stage).
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Energy {
    /// The stage this energy belongs to.
    pub stage: EnergyStage,
    /// The numeric energy within the stage.
    pub value: f64,
}

impl Energy {
    /// Returns `true` if this energy is strictly better than `other`.
    ///
    /// Higher stage wins outright; equal stages compare by value.
    pub fn is_better_than(self, other: Energy) -> bool {
        if self.stage != other.stage {
            self.stage > other.stage
        } else {
            self.value < other.value
        }
    }

    /// The Metropolis acceptance delta of `self` relative to `other`,
    /// positive when `self` is worse.
    ///
    /// When the stages differ the delta is [`STAGE_PENALTY`] per stage
    /// step, independent of the real magnitudes; otherwise it is the plain
    /// value difference.
    pub fn delta_from(self, other: Energy) -> f64 {
        if self.stage != other.stage {
            (other.stage as i32 - self.stage as i32) as f64 * STAGE_PENALTY
        } else {
            self.value - other.value
        }
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value, self.stage)
    }
}

/// A circuit's energy evaluator with pre-resolved connection endpoints.
///
/// Construction resolves every connection endpoint to a component slot plus
/// a port offset exactly once, so the evaluation loop does no string
/// hashing. A connection referencing an unknown component is a consistency
/// error; a known component with a missing port name defaults to offset
/// `(0, 0)` with a warning, the one sanctioned soft default.
#[derive(Debug)]
pub struct EnergyModel {
    sizes: Vec<Vec2>,
    wires: Vec<ResolvedWire>,
}

#[derive(Debug)]
struct ResolvedWire {
    start_slot: usize,
    start_offset: Vec2,
    end_slot: usize,
    end_offset: Vec2,
}

impl EnergyModel {
    /// Builds the evaluator for a circuit.
    pub fn new(circuit: &Circuit, sink: &DiagnosticSink) -> Result<Self, PlaceError> {
        let sizes = circuit.components.iter().map(|c| c.size).collect();

        let mut wires = Vec::with_capacity(circuit.connection_count());
        for (index, connection) in circuit.connections.iter().enumerate() {
            let (start_slot, start_offset) = resolve(circuit, &connection.start, index, sink)?;
            let (end_slot, end_offset) = resolve(circuit, &connection.end, index, sink)?;
            wires.push(ResolvedWire {
                start_slot,
                start_offset,
                end_slot,
                end_offset,
            });
        }

        Ok(Self { sizes, wires })
    }

    /// Evaluates the energy of a layout.
    ///
    /// The layout must cover every component
    /// (see [`Layout::validate`](crate::layout::Layout::validate)).
    pub fn energy(&self, layout: &Layout) -> Energy {
        debug_assert_eq!(layout.positions.len(), self.sizes.len());

        // Overlap stage: total intersection area over all pairs.
        let mut overlap = 0.0;
        let mut overlapping = false;
        for i in 0..self.sizes.len() {
            let (p1, s1) = (layout.positions[i], self.sizes[i]);
            for j in (i + 1)..self.sizes.len() {
                let (p2, s2) = (layout.positions[j], self.sizes[j]);
                let dx = (p1.x + s1.x).min(p2.x + s2.x) - p1.x.max(p2.x);
                let dy = (p1.y + s1.y).min(p2.y + s2.y) - p1.y.max(p2.y);
                if dx > 0 && dy > 0 {
                    overlapping = true;
                    overlap += dx as f64 * dy as f64;
                }
            }
        }
        if overlapping {
            return Energy {
                stage: EnergyStage::Overlap,
                value: overlap,
            };
        }

        // Wire-length stage: squared squared distance per connection.
        let mut wire = 0.0;
        for w in &self.wires {
            let start = layout.positions[w.start_slot] + w.start_offset;
            let end = layout.positions[w.end_slot] + w.end_offset;
            let dx = (start.x - end.x) as f64;
            let dy = (start.y - end.y) as f64;
            let squared = dx * dx + dy * dy;
            wire += squared * squared;
        }
        Energy {
            stage: EnergyStage::WireLength,
            value: wire,
        }
    }

    /// Sum of all component bounding-box areas.
    pub fn total_area(&self) -> i64 {
        self.sizes.iter().map(|s| s.area()).sum()
    }

    /// Number of components this model evaluates.
    pub fn component_count(&self) -> usize {
        self.sizes.len()
    }
}

fn resolve(
    circuit: &Circuit,
    endpoint: &PortRef,
    index: usize,
    sink: &DiagnosticSink,
) -> Result<(usize, Vec2), PlaceError> {
    let component =
        circuit
            .get_component(endpoint.component)
            .ok_or(PlaceError::UnknownComponent {
                index,
                component: endpoint.component,
            })?;
    let offset = match component.port_offset(&endpoint.port) {
        Some(offset) => offset,
        None => {
            sink.emit(
                Diagnostic::warning(format!(
                    "port '{}' not found on component '{}'",
                    endpoint.port, component.name
                ))
                .with_note("defaulting to offset (0, 0)"),
            );
            Vec2::ZERO
        }
    };
    Ok((endpoint.component.as_slot(), offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::{indexmap, IndexMap};
    use lodestone_diagnostics::Severity;
    use lodestone_graph::{ComponentId, PortRef};

    fn two_boxes(size_a: Vec2, size_b: Vec2) -> Circuit {
        let mut circuit = Circuit::new();
        circuit.add_component("a", size_a, IndexMap::new());
        circuit.add_component("b", size_b, IndexMap::new());
        circuit
    }

    #[test]
    fn overlap_area_is_exact() {
        // A 2x2 at (0,0) and B 2x2 at (1,1) intersect in a 1x1 square.
        let circuit = two_boxes(Vec2::new(2, 2), Vec2::new(2, 2));
        let sink = DiagnosticSink::new();
        let model = EnergyModel::new(&circuit, &sink).unwrap();
        let energy = model.energy(&Layout::new(vec![Vec2::new(0, 0), Vec2::new(1, 1)]));
        assert_eq!(energy.stage, EnergyStage::Overlap);
        assert_eq!(energy.value, 1.0);
    }

    #[test]
    fn touching_boxes_do_not_overlap() {
        let circuit = two_boxes(Vec2::new(2, 2), Vec2::new(2, 2));
        let sink = DiagnosticSink::new();
        let model = EnergyModel::new(&circuit, &sink).unwrap();
        let energy = model.energy(&Layout::new(vec![Vec2::new(0, 0), Vec2::new(2, 0)]));
        assert_eq!(energy.stage, EnergyStage::WireLength);
    }

    #[test]
    fn wire_length_is_squared_squared_distance() {
        let mut circuit = Circuit::new();
        let a = circuit.add_component(
            "a",
            Vec2::new(1, 1),
            indexmap! { "out".to_string() => Vec2::ZERO },
        );
        let b = circuit.add_component(
            "b",
            Vec2::new(1, 1),
            indexmap! { "in".to_string() => Vec2::ZERO },
        );
        circuit.add_connection(PortRef::new(a, "out"), PortRef::new(b, "in"));

        let sink = DiagnosticSink::new();
        let model = EnergyModel::new(&circuit, &sink).unwrap();
        let energy = model.energy(&Layout::new(vec![Vec2::new(0, 0), Vec2::new(3, 0)]));
        assert_eq!(energy.stage, EnergyStage::WireLength);
        assert_eq!(energy.value, 81.0);
    }

    #[test]
    fn port_offsets_shift_endpoints() {
        let mut circuit = Circuit::new();
        let a = circuit.add_component(
            "a",
            Vec2::new(2, 2),
            indexmap! { "out".to_string() => Vec2::new(1, 0) },
        );
        let b = circuit.add_component(
            "b",
            Vec2::new(1, 1),
            indexmap! { "in".to_string() => Vec2::ZERO },
        );
        circuit.add_connection(PortRef::new(a, "out"), PortRef::new(b, "in"));

        let sink = DiagnosticSink::new();
        let model = EnergyModel::new(&circuit, &sink).unwrap();
        // a at (0,0) with offset (1,0); b at (3,0): dx = 2 -> (2^2)^2 = 16
        let energy = model.energy(&Layout::new(vec![Vec2::new(0, 0), Vec2::new(3, 0)]));
        assert_eq!(energy.value, 16.0);
    }

    #[test]
    fn stage_dominance() {
        let wire = Energy {
            stage: EnergyStage::WireLength,
            value: 10_000.0,
        };
        let overlap = Energy {
            stage: EnergyStage::Overlap,
            value: 1.0,
        };
        assert!(wire.is_better_than(overlap));
        assert!(!overlap.is_better_than(wire));
    }

    #[test]
    fn same_stage_compares_by_value() {
        let low = Energy {
            stage: EnergyStage::WireLength,
            value: 10.0,
        };
        let high = Energy {
            stage: EnergyStage::WireLength,
            value: 20.0,
        };
        assert!(low.is_better_than(high));
        assert!(!high.is_better_than(low));
        assert!(!low.is_better_than(low));
    }

    #[test]
    fn stage_regression_delta_is_large_and_positive() {
        let wire = Energy {
            stage: EnergyStage::WireLength,
            value: 500.0,
        };
        let overlap = Energy {
            stage: EnergyStage::Overlap,
            value: 2.0,
        };
        // Falling back into the overlap stage is a large positive delta
        assert_eq!(overlap.delta_from(wire), STAGE_PENALTY);
        // Escaping the overlap stage is a large negative delta
        assert_eq!(wire.delta_from(overlap), -STAGE_PENALTY);
        // Same stage: plain value difference
        let wire2 = Energy {
            stage: EnergyStage::WireLength,
            value: 400.0,
        };
        assert_eq!(wire.delta_from(wire2), 100.0);
    }

    #[test]
    fn unknown_component_is_a_consistency_error() {
        let mut circuit = Circuit::new();
        let a = circuit.add_component(
            "a",
            Vec2::new(1, 1),
            indexmap! { "out".to_string() => Vec2::ZERO },
        );
        circuit.add_connection(PortRef::new(a, "out"), PortRef::new(ComponentId::from_raw(99), "in"));

        let sink = DiagnosticSink::new();
        let err = EnergyModel::new(&circuit, &sink).unwrap_err();
        assert!(matches!(
            err,
            PlaceError::UnknownComponent { index: 0, .. }
        ));
    }

    #[test]
    fn missing_port_defaults_with_warning() {
        let mut circuit = Circuit::new();
        let a = circuit.add_component(
            "a",
            Vec2::new(1, 1),
            indexmap! { "out".to_string() => Vec2::new(5, 5) },
        );
        let b = circuit.add_component("b", Vec2::new(1, 1), IndexMap::new());
        circuit.add_connection(PortRef::new(a, "out"), PortRef::new(b, "mystery"));

        let sink = DiagnosticSink::new();
        let model = EnergyModel::new(&circuit, &sink).unwrap();
        let warnings = sink
            .diagnostics()
            .into_iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();
        assert_eq!(warnings, 1);

        // Endpoint lands on b's origin
        let energy = model.energy(&Layout::new(vec![Vec2::new(0, 0), Vec2::new(7, 5)]));
        // start = (5,5), end = (7,5): dx = 2 -> 16
        assert_eq!(energy.value, 16.0);
    }

    #[test]
    fn empty_circuit_is_zero_wire_length() {
        let circuit = Circuit::new();
        let sink = DiagnosticSink::new();
        let model = EnergyModel::new(&circuit, &sink).unwrap();
        let energy = model.energy(&Layout::new(Vec::new()));
        assert_eq!(energy.stage, EnergyStage::WireLength);
        assert_eq!(energy.value, 0.0);
    }

    #[test]
    fn total_area_sums_boxes() {
        let circuit = two_boxes(Vec2::new(2, 3), Vec2::new(4, 4));
        let sink = DiagnosticSink::new();
        let model = EnergyModel::new(&circuit, &sink).unwrap();
        assert_eq!(model.total_area(), 22);
        assert_eq!(model.component_count(), 2);
    }
}
