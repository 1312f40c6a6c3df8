//! `lodestone graph` — netlist to placement circuit.

use lodestone_diagnostics::DiagnosticSink;

use crate::pipeline::{load_circuit, render_diagnostics, write_output};
use crate::{CliError, GlobalArgs, GraphArgs};

/// Runs the `lodestone graph` command.
///
/// Builds the circuit for the selected module and writes it as JSON.
/// Returns exit code 0 if no error diagnostics were emitted, 1 otherwise.
pub fn run(args: &GraphArgs, global: &GlobalArgs) -> Result<i32, CliError> {
    let sink = DiagnosticSink::new();
    let circuit = load_circuit(&args.netlist, args.module.as_deref(), &sink);
    let has_errors = render_diagnostics(&sink, global);
    let circuit = circuit?;

    let json = serde_json::to_string_pretty(&circuit)?;
    write_output(args.output.as_deref(), &json)?;
    Ok(if has_errors { 1 } else { 0 })
}
