//! Typed records for the synthesis tool's JSON netlist output.
//!
//! Field names and shapes follow the yosys `write_json` format: modules hold
//! boundary `ports`, `cells`, and `netnames`, and cell connection lists mix
//! global bit indices with `"0"`/`"1"` constant literals.

use crate::error::NetlistError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Signal direction of a port, relative to the module or cell that owns it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    /// The port consumes a value.
    Input,
    /// The port drives a value.
    Output,
}

/// A module boundary port: a direction plus the global bit indices it spans.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModulePort {
    /// Direction of the port from the module's perspective.
    pub direction: PortDirection,
    /// Global bit indices carried by this port, LSB first.
    pub bits: Vec<u64>,
}

/// One element of a cell connection list: a global bit index or a constant
/// bit literal (`"0"`/`"1"` after validation).
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NetBit {
    /// A global bit index into the module's bit space.
    Net(u64),
    /// A constant bit literal.
    Literal(String),
}

impl NetBit {
    /// Returns the global bit index, if this element is one.
    pub fn as_net(&self) -> Option<u64> {
        match self {
            NetBit::Net(bit) => Some(*bit),
            NetBit::Literal(_) => None,
        }
    }

    /// Returns the literal string, if this element is one.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            NetBit::Net(_) => None,
            NetBit::Literal(lit) => Some(lit),
        }
    }
}

/// A cell parameter value: an integer, or a string the synthesis tool has
/// not yet normalized (binary literals, identifiers).
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// An integer parameter.
    Int(i64),
    /// A string parameter (normalized to `Int` when it is a binary literal).
    Str(String),
}

/// The closed set of cell kinds Lodestone can place.
///
/// Raw type tags are resolved exactly once, at the netlist boundary;
/// [`CellKind::Unknown`] is carried explicitly and always rejected by the
/// graph builder rather than defaulted.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum CellKind {
    /// A synchronous-reset D flip-flop (`$sdff`).
    Sdff,
    /// A binary adder (`$add`).
    Add,
    /// Any unsupported cell type, carrying the raw tag for reporting.
    Unknown(String),
}

impl CellKind {
    /// Resolves a raw synthesis type tag to a cell kind.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "$sdff" => CellKind::Sdff,
            "$add" => CellKind::Add,
            other => CellKind::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellKind::Sdff => write!(f, "$sdff"),
            CellKind::Add => write!(f, "$add"),
            CellKind::Unknown(tag) => write!(f, "{tag}"),
        }
    }
}

/// One cell instance in a module.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Cell {
    /// The raw synthesis type tag (e.g. `"$sdff"`).
    #[serde(rename = "type")]
    pub cell_type: String,
    /// Cell parameters (widths, init values, ...).
    #[serde(default)]
    pub parameters: IndexMap<String, ParamValue>,
    /// Direction of each cell port.
    #[serde(default)]
    pub port_directions: IndexMap<String, PortDirection>,
    /// Per-port connection lists, LSB first.
    #[serde(default)]
    pub connections: IndexMap<String, Vec<NetBit>>,
}

impl Cell {
    /// Resolves this cell's type tag to the closed [`CellKind`] union.
    pub fn kind(&self) -> CellKind {
        CellKind::from_tag(&self.cell_type)
    }

    /// Returns an integer parameter by name, if present and integral.
    ///
    /// Binary-string parameters must be normalized first
    /// (see [`Module::normalize`](crate::types::Module::normalize)).
    pub fn int_parameter(&self, name: &str) -> Option<i64> {
        match self.parameters.get(name) {
            Some(ParamValue::Int(value)) => Some(*value),
            _ => None,
        }
    }
}

/// A named net: the global bit indices that are electrically identical.
///
/// Nets are reporting groups; wiring is resolved per individual bit.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NetName {
    /// Global bit indices grouped under this name, LSB first.
    pub bits: Vec<u64>,
}

/// One hardware module: boundary ports, cell instances, and named nets.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Module {
    /// Boundary ports by name, in declared order.
    #[serde(default)]
    pub ports: IndexMap<String, ModulePort>,
    /// Cell instances by name, in declared order.
    #[serde(default)]
    pub cells: IndexMap<String, Cell>,
    /// Named nets by name, in declared order.
    #[serde(default)]
    pub netnames: IndexMap<String, NetName>,
}

/// The top-level synthesis output document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Design {
    /// Tool identification string, if present.
    #[serde(default)]
    pub creator: Option<String>,
    /// All modules in the document, in declared order.
    #[serde(default)]
    pub modules: IndexMap<String, Module>,
}

impl Design {
    /// Parses a synthesis JSON document.
    pub fn from_json(json: &str) -> Result<Self, NetlistError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Selects a module by name, or the sole module when no name is given.
    pub fn module(&self, name: Option<&str>) -> Result<(&str, &Module), NetlistError> {
        match name {
            Some(name) => self
                .modules
                .get_key_value(name)
                .map(|(name, module)| (name.as_str(), module))
                .ok_or_else(|| NetlistError::UnknownModule(name.to_string())),
            None => {
                if self.modules.len() == 1 {
                    let (name, module) = self.modules.first().unwrap();
                    Ok((name.as_str(), module))
                } else {
                    Err(NetlistError::AmbiguousTopModule(self.modules.len()))
                }
            }
        }
    }
}
