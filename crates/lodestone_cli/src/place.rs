//! `lodestone place` — the full netlist-to-layout pipeline.

use lodestone_diagnostics::DiagnosticSink;
use lodestone_place::{anneal, AnnealOptions};

use crate::pipeline::{load_circuit, render_diagnostics, write_output};
use crate::{CliError, GlobalArgs, PlaceArgs};

/// Runs the `lodestone place` command.
///
/// Builds the circuit, anneals a layout for it, and writes the layout result
/// as JSON. Returns exit code 0 if no error diagnostics were emitted, 1
/// otherwise.
pub fn run(args: &PlaceArgs, global: &GlobalArgs) -> Result<i32, CliError> {
    let sink = DiagnosticSink::new();
    let result = load_circuit(&args.netlist, args.module.as_deref(), &sink).and_then(|circuit| {
        let options = AnnealOptions {
            iterations: args.iterations,
            initial_temperature: args.temperature,
            cooling: args.cooling,
            snapshot_period: args.snapshot_period,
            seed: args.seed,
        };
        Ok(anneal(&circuit, &options, &sink)?)
    });
    let has_errors = render_diagnostics(&sink, global);
    let result = result?;

    if !global.quiet {
        eprintln!("best energy: {}", result.best_energy);
    }

    let json = serde_json::to_string_pretty(&result)?;
    write_output(args.output.as_deref(), &json)?;
    Ok(if has_errors { 1 } else { 0 })
}
