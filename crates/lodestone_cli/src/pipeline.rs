//! Shared pipeline steps between the `graph` and `place` subcommands.

use std::fs;
use std::io::Write;
use std::path::Path;

use lodestone_diagnostics::{DiagnosticSink, Severity};
use lodestone_graph::{build_circuit, CellRegistry, Circuit};
use lodestone_netlist::Design;

use crate::{CliError, GlobalArgs};

/// Loads a netlist document and builds the placement circuit for one module.
///
/// Reads the JSON file, selects the requested module (or the sole one),
/// normalizes its parameters, and runs the graph builder with the standard
/// cell registry.
pub fn load_circuit(
    path: &Path,
    module_name: Option<&str>,
    sink: &DiagnosticSink,
) -> Result<Circuit, CliError> {
    let text = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let design = Design::from_json(&text)?;
    let (_, module) = design.module(module_name)?;

    let mut module = module.clone();
    module.normalize()?;

    let registry = CellRegistry::standard();
    Ok(build_circuit(&module, &registry, sink)?)
}

/// Prints accumulated diagnostics to stderr and reports whether any were
/// errors.
///
/// Quiet mode shows only errors; verbose mode adds notes; the default shows
/// errors and warnings.
pub fn render_diagnostics(sink: &DiagnosticSink, global: &GlobalArgs) -> bool {
    for diagnostic in sink.diagnostics() {
        let show = match diagnostic.severity {
            Severity::Error => true,
            Severity::Warning => !global.quiet,
            Severity::Note => global.verbose && !global.quiet,
        };
        if show {
            eprintln!("{diagnostic}");
        }
    }
    sink.has_errors()
}

/// Writes a JSON payload to the given path, or to stdout when none is given.
pub fn write_output(output: Option<&Path>, json: &str) -> Result<(), CliError> {
    match output {
        Some(path) => fs::write(path, json).map_err(|e| CliError::io(path, e)),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .and_then(|_| stdout.write_all(b"\n"))
                .map_err(|e| CliError::io("<stdout>", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lodestone_diagnostics::Diagnostic;
    use std::io::Write;

    const COUNTER_JSON: &str = r#"{
        "creator": "Yosys 0.38",
        "modules": {
            "counter": {
                "ports": {
                    "clk": { "direction": "input", "bits": [2] },
                    "rst": { "direction": "input", "bits": [3] },
                    "q": { "direction": "output", "bits": [4, 5] }
                },
                "cells": {
                    "add0": {
                        "type": "$add",
                        "parameters": { "A_WIDTH": 2, "B_WIDTH": 1, "Y_WIDTH": 2 },
                        "port_directions": { "A": "input", "B": "input", "Y": "output" },
                        "connections": { "A": [4, 5], "B": ["1"], "Y": [6, 7] }
                    },
                    "ff0": {
                        "type": "$sdff",
                        "parameters": { "WIDTH": 2, "SRST_VALUE": "00" },
                        "port_directions": {
                            "CLK": "input", "D": "input", "Q": "output", "SRST": "input"
                        },
                        "connections": {
                            "CLK": [2], "D": [6, 7], "Q": [4, 5], "SRST": [3]
                        }
                    }
                },
                "netnames": {}
            }
        }
    }"#;

    fn write_netlist() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(COUNTER_JSON.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_circuit_from_file() {
        let file = write_netlist();
        let sink = DiagnosticSink::new();
        let circuit = load_circuit(file.path(), None, &sink).unwrap();
        assert!(circuit.component_count() > 0);
        assert!(!sink.has_errors());
    }

    #[test]
    fn load_circuit_unknown_module() {
        let file = write_netlist();
        let sink = DiagnosticSink::new();
        let err = load_circuit(file.path(), Some("missing"), &sink).unwrap_err();
        assert!(matches!(err, CliError::Netlist(_)));
    }

    #[test]
    fn load_circuit_missing_file() {
        let sink = DiagnosticSink::new();
        let err = load_circuit(Path::new("/nonexistent/netlist.json"), None, &sink).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn render_reports_errors() {
        let sink = DiagnosticSink::new();
        sink.emit(Diagnostic::warning("be careful"));
        let global = GlobalArgs {
            quiet: false,
            verbose: false,
        };
        assert!(!render_diagnostics(&sink, &global));

        sink.emit(Diagnostic::error("it broke"));
        assert!(render_diagnostics(&sink, &global));
    }

    #[test]
    fn write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_output(Some(&path), "{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}
