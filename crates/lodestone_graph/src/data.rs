//! Core placement-graph data structures.
//!
//! A [`Circuit`] is the unit handed to the placement engine: an arena of
//! sized, ported [`Component`]s (insertion order significant) plus directed
//! [`Connection`]s between component ports. The circuit owns all components
//! and connections by value; everything else references components through
//! their [`ComponentId`].

use crate::ids::ComponentId;
use indexmap::IndexMap;
use lodestone_common::Vec2;
use serde::{Deserialize, Serialize};

/// A placeable building block of the circuit.
///
/// Represents a real netlist cell instance, a synthetic constant-value
/// source, or one of the two module-boundary pseudo components. Port offsets
/// are advisory: a missing port name at lookup time defaults to `(0, 0)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    /// The unique ID of this component, equal to its slot in the circuit.
    pub id: ComponentId,
    /// Human-readable component name (e.g., the netlist cell name).
    pub name: String,
    /// 2D bounding size; both axes are non-negative.
    pub size: Vec2,
    /// Local port offsets by port name, in resolution order.
    pub ports: IndexMap<String, Vec2>,
}

impl Component {
    /// Returns the local offset of a port, if that port is known.
    pub fn port_offset(&self, port: &str) -> Option<Vec2> {
        self.ports.get(port).copied()
    }
}

/// A reference to one port of one component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortRef {
    /// The component owning the port.
    pub component: ComponentId,
    /// The port name on that component.
    pub port: String,
}

impl PortRef {
    /// Creates a port reference.
    pub fn new(component: ComponentId, port: impl Into<String>) -> Self {
        Self {
            component,
            port: port.into(),
        }
    }
}

/// A directed wire between two component ports.
///
/// `start` is the driving endpoint, `end` the receiving endpoint. Multiple
/// connections may share either endpoint (fan-out and fan-in both occur).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// The driving (source) endpoint.
    pub start: PortRef,
    /// The receiving (sink) endpoint.
    pub end: PortRef,
}

/// A complete placement problem: components plus their wiring.
///
/// Built once per module by [`build_circuit`](crate::build::build_circuit)
/// and treated as immutable input by the placement engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circuit {
    /// All components, in insertion order. A component's ID equals its
    /// index in this vector.
    pub components: Vec<Component>,
    /// All connections, in insertion order.
    pub connections: Vec<Connection>,
}

impl Circuit {
    /// Creates an empty circuit.
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            connections: Vec::new(),
        }
    }

    /// Adds a component and returns its ID.
    ///
    /// Sizes must be non-negative on both axes.
    pub fn add_component(
        &mut self,
        name: impl Into<String>,
        size: Vec2,
        ports: IndexMap<String, Vec2>,
    ) -> ComponentId {
        debug_assert!(size.x >= 0 && size.y >= 0, "component size must be non-negative");
        let id = ComponentId::from_raw(self.components.len() as u32);
        self.components.push(Component {
            id,
            name: name.into(),
            size,
            ports,
        });
        id
    }

    /// Adds a directed connection between two ports.
    pub fn add_connection(&mut self, start: PortRef, end: PortRef) {
        self.connections.push(Connection { start, end });
    }

    /// Returns the component with the given ID.
    ///
    /// Panics if the ID does not belong to this circuit; use
    /// [`get_component`](Self::get_component) for fallible lookup.
    pub fn component(&self, id: ComponentId) -> &Component {
        &self.components[id.as_slot()]
    }

    /// Returns the component with the given ID, if it exists.
    pub fn get_component(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(id.as_slot())
    }

    /// Returns the number of components.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Returns the number of connections.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}
