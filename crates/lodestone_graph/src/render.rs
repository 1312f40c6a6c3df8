//! Cell footprint capability and the kind-to-footprint registry.
//!
//! The builder resolves each cell's geometry through a [`CellFootprint`]:
//! a 2D bounding size plus semantic location tags (e.g. `"clock"`) that map
//! netlist port names to physical offsets. Footprints are looked up through
//! a [`CellRegistry`] populated at startup, so supporting a new cell kind
//! means adding a registry entry, not touching the builder's core loop.
//!
//! The footprints here describe the plan-view geometry of the voxel
//! structures the renderer emits for each cell; the builder only ever sees
//! sizes and tag locations, never voxel content.

use crate::error::GraphError;
use lodestone_common::Vec2;
use lodestone_netlist::{Cell, CellKind};
use std::collections::HashMap;

/// A rendered cell's plan-view geometry.
///
/// `find_tag` returns every location carrying a semantic tag, in the
/// footprint's own deterministic reporting order.
pub trait CellFootprint {
    /// The 2D bounding size of the cell.
    fn size(&self) -> Vec2;

    /// All locations tagged with the given semantic label.
    fn find_tag(&self, tag: &str) -> Vec<Vec2>;
}

/// Constructor for a cell kind's footprint, parameterized by the instance.
pub type FootprintBuilder =
    Box<dyn Fn(&str, &Cell) -> Result<Box<dyn CellFootprint>, GraphError> + Send + Sync>;

/// Everything the builder needs to know about one cell kind.
pub struct CellSpec {
    /// Netlist port name to semantic tag, in resolution order.
    pub tag_ports: Vec<(String, String)>,
    /// Builds the footprint for a concrete cell instance.
    pub build: FootprintBuilder,
}

/// Registry mapping each supported [`CellKind`] to its [`CellSpec`].
#[derive(Default)]
pub struct CellRegistry {
    specs: HashMap<CellKind, CellSpec>,
}

impl CellRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            specs: HashMap::new(),
        }
    }

    /// Registers (or replaces) the spec for a cell kind.
    pub fn register(&mut self, kind: CellKind, spec: CellSpec) {
        self.specs.insert(kind, spec);
    }

    /// Looks up the spec for a cell kind.
    pub fn get(&self, kind: &CellKind) -> Option<&CellSpec> {
        self.specs.get(kind)
    }

    /// The standard registry with all cell kinds Lodestone can render.
    pub fn standard() -> Self {
        let mut registry = Self::new();

        registry.register(
            CellKind::Sdff,
            CellSpec {
                tag_ports: tag_ports(&[
                    ("CLK", "clock"),
                    ("D", "input"),
                    ("Q", "output"),
                    ("SRST", "reset"),
                ]),
                build: Box::new(|cell_name, cell| {
                    let width = require_int(cell_name, cell, "WIDTH")?;
                    Ok(Box::new(SdffFootprint::new(width.max(1) as u32)))
                }),
            },
        );

        registry.register(
            CellKind::Add,
            CellSpec {
                tag_ports: tag_ports(&[
                    ("A", "input-1-1"),
                    ("B", "input-2-1"),
                    ("Y", "output-1"),
                ]),
                build: Box::new(|cell_name, cell| {
                    let a_width = require_int(cell_name, cell, "A_WIDTH")?;
                    let b_width = require_int(cell_name, cell, "B_WIDTH")?;
                    Ok(Box::new(AdderFootprint::new(
                        a_width.max(b_width).max(1) as u32
                    )))
                }),
            },
        );

        registry
    }
}

fn tag_ports(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(port, tag)| (port.to_string(), tag.to_string()))
        .collect()
}

fn require_int(cell_name: &str, cell: &Cell, parameter: &str) -> Result<i64, GraphError> {
    cell.int_parameter(parameter)
        .ok_or_else(|| GraphError::MissingParameter {
            cell: cell_name.to_string(),
            parameter: parameter.to_string(),
        })
}

/// Plan-view footprint of the synchronous-reset D flip-flop.
///
/// Bit slices stack vertically in the rendered structure, so the plan-view
/// size is independent of the register width.
pub struct SdffFootprint {
    /// Number of stacked bit slices.
    pub stack_height: u32,
}

impl SdffFootprint {
    /// Creates the footprint for a register of the given width.
    pub fn new(stack_height: u32) -> Self {
        Self { stack_height }
    }
}

impl CellFootprint for SdffFootprint {
    fn size(&self) -> Vec2 {
        Vec2::new(5, 7)
    }

    fn find_tag(&self, tag: &str) -> Vec<Vec2> {
        match tag {
            "clock" => vec![Vec2::new(0, 0)],
            "input" => vec![Vec2::new(0, 3)],
            "reset" => vec![Vec2::new(0, 6)],
            "output" => vec![Vec2::new(4, 3)],
            _ => Vec::new(),
        }
    }
}

/// Plan-view footprint of the carry-chain adder.
///
/// Bit lanes extend horizontally, one two-column lane per operand bit.
/// Per-lane tags carry the lane's binary weight as a suffix
/// (`input-1-4` is operand A, bit weight 4).
pub struct AdderFootprint {
    /// Operand width in bits.
    pub bits: u32,
}

impl AdderFootprint {
    /// Creates the footprint for an adder of the given operand width.
    pub fn new(bits: u32) -> Self {
        Self { bits }
    }
}

impl CellFootprint for AdderFootprint {
    fn size(&self) -> Vec2 {
        Vec2::new(2 * self.bits as i32, 9)
    }

    fn find_tag(&self, tag: &str) -> Vec<Vec2> {
        if tag == "output-carry" {
            return vec![Vec2::new(2 * self.bits as i32 - 1, 8)];
        }
        let Some((prefix, weight)) = tag.rsplit_once('-') else {
            return Vec::new();
        };
        let Ok(weight) = weight.parse::<u64>() else {
            return Vec::new();
        };
        if !weight.is_power_of_two() {
            return Vec::new();
        }
        let lane = weight.trailing_zeros();
        if lane >= self.bits {
            return Vec::new();
        }
        let x = 2 * lane as i32;
        match prefix {
            "input-1" => vec![Vec2::new(x, 0)],
            "input-2" => vec![Vec2::new(x, 2)],
            "output" => vec![Vec2::new(x, 8)],
            _ => Vec::new(),
        }
    }
}
