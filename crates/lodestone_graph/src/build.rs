//! Netlist graph builder.
//!
//! Converts one validated hardware module into a [`Circuit`]. The builder
//! either produces a fully wired graph or fails with a [`GraphError`]; it
//! never returns a partially wired circuit.

use crate::data::{Circuit, PortRef};
use crate::error::GraphError;
use crate::ids::ComponentId;
use crate::render::CellRegistry;
use indexmap::IndexMap;
use lodestone_common::Vec2;
use lodestone_diagnostics::{Diagnostic, DiagnosticSink};
use lodestone_netlist::{Module, PortDirection};
use std::collections::HashMap;

/// Name of the pseudo component standing in for the module's input boundary.
pub const INPUT_PSEUDO: &str = "input";

/// Name of the pseudo component standing in for the module's output boundary.
pub const OUTPUT_PSEUDO: &str = "output";

/// The single port exposed by each boundary pseudo component.
pub const IO_PORT: &str = "IO";

/// Builds the placement graph for one module.
///
/// The produced circuit contains, in order: the two boundary pseudo
/// components, one component per cell (declared order), and one synthetic
/// constant component per `"0"`/`"1"` literal in any cell connection list.
/// Wiring connects every driver of each net bit to every receiver of that
/// bit (full bipartite product).
///
/// Non-fatal conditions (a tag matching several locations, per-bit fan-out
/// counts) are reported through `sink`; every structural violation aborts
/// with an error.
pub fn build_circuit(
    module: &Module,
    registry: &CellRegistry,
    sink: &DiagnosticSink,
) -> Result<Circuit, GraphError> {
    let mut circuit = Circuit::new();

    let input_id = circuit.add_component(INPUT_PSEUDO, Vec2::new(1, 1), io_ports());
    let output_id = circuit.add_component(OUTPUT_PSEUDO, Vec2::new(1, 1), io_ports());

    // Cells, in declared order.
    let mut cell_ids: HashMap<&str, ComponentId> = HashMap::new();
    for (cell_name, cell) in &module.cells {
        let kind = cell.kind();
        let spec = registry
            .get(&kind)
            .ok_or_else(|| GraphError::UnknownCellKind {
                cell: cell_name.clone(),
                kind: kind.to_string(),
            })?;
        let footprint = (spec.build)(cell_name, cell)?;

        let mut ports: IndexMap<String, Vec2> = IndexMap::new();
        for (port, tag) in &spec.tag_ports {
            let locations = footprint.find_tag(tag);
            let Some(first) = locations.first() else {
                return Err(GraphError::MissingTag {
                    cell: cell_name.clone(),
                    tag: tag.clone(),
                });
            };
            if locations.len() > 1 {
                sink.emit(
                    Diagnostic::warning(format!(
                        "tag '{tag}' found {} times in footprint of cell '{cell_name}'",
                        locations.len()
                    ))
                    .with_note("using the first location"),
                );
            }
            ports.insert(port.clone(), *first);
        }
        if ports.is_empty() {
            return Err(GraphError::NoPorts {
                cell: cell_name.clone(),
            });
        }

        let id = circuit.add_component(cell_name.clone(), footprint.size(), ports);
        cell_ids.insert(cell_name.as_str(), id);
    }

    // Constant literals become synthetic single-port source components.
    for (cell_name, cell) in &module.cells {
        let consumer = cell_ids[cell_name.as_str()];
        for (port_name, bits) in &cell.connections {
            for (index, bit) in bits.iter().enumerate() {
                if bit.as_literal().is_none() {
                    continue;
                }
                let mut ports = IndexMap::new();
                ports.insert("output".to_string(), Vec2::ZERO);
                let constant_id = circuit.add_component(
                    format!("constant_{index}_{cell_name}"),
                    Vec2::new(1, 1),
                    ports,
                );
                circuit.add_connection(
                    PortRef::new(constant_id, "output"),
                    PortRef::new(consumer, port_name.clone()),
                );
            }
        }
    }

    // Per net, per bit: wire every driver to every receiver.
    for (net_name, net) in &module.netnames {
        for &bit in &net.bits {
            let mut drivers: Vec<PortRef> = Vec::new();
            let mut receivers: Vec<PortRef> = Vec::new();

            for (cell_name, cell) in &module.cells {
                for (port_name, bits) in &cell.connections {
                    if !bits.iter().any(|b| b.as_net() == Some(bit)) {
                        continue;
                    }
                    let Some(direction) = cell.port_directions.get(port_name) else {
                        continue;
                    };
                    let endpoint = PortRef::new(cell_ids[cell_name.as_str()], port_name.clone());
                    match direction {
                        PortDirection::Output => drivers.push(endpoint),
                        PortDirection::Input => receivers.push(endpoint),
                    }
                }
            }

            for port in module.ports.values() {
                if !port.bits.contains(&bit) {
                    continue;
                }
                match port.direction {
                    PortDirection::Input => drivers.push(PortRef::new(input_id, IO_PORT)),
                    PortDirection::Output => receivers.push(PortRef::new(output_id, IO_PORT)),
                }
            }

            if drivers.is_empty() {
                return Err(GraphError::NoDriver {
                    net: net_name.clone(),
                    bit,
                });
            }
            if receivers.is_empty() {
                return Err(GraphError::NoReceiver {
                    net: net_name.clone(),
                    bit,
                });
            }

            sink.emit(Diagnostic::note(format!(
                "bit {bit} of net '{net_name}' has {} drivers and {} receivers",
                drivers.len(),
                receivers.len()
            )));

            for driver in &drivers {
                for receiver in &receivers {
                    circuit.add_connection(driver.clone(), receiver.clone());
                }
            }
        }
    }

    Ok(circuit)
}

fn io_ports() -> IndexMap<String, Vec2> {
    let mut ports = IndexMap::new();
    ports.insert(IO_PORT.to_string(), Vec2::ZERO);
    ports
}
