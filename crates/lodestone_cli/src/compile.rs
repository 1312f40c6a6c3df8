//! `lodestone compile` — Verilog synthesis via yosys.

use std::process::Command;

use crate::{CliError, CompileArgs, GlobalArgs};

/// The synthesis pass list handed to yosys.
///
/// Flattens the hierarchy and lowers everything to the word-level cells the
/// graph builder understands; memories are kept unmapped so they surface as
/// dedicated cells instead of FF arrays.
const SYNTH_PASSES: &[&str] = &[
    "proc",
    "flatten",
    "wreduce",
    "opt",
    "fsm",
    "opt",
    "memory -nomap -nordff",
    "opt",
    "muxpack",
    "peepopt",
    "async2sync",
    "wreduce",
    "opt -mux_bool",
    "clean",
    "check",
];

/// Runs the `lodestone compile` command.
///
/// Invokes yosys on the source file and writes the netlist JSON document.
/// Returns exit code 0 on success.
pub fn run(args: &CompileArgs, global: &GlobalArgs) -> Result<i32, CliError> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.source.with_extension("json"));

    let script = SYNTH_PASSES.join("; ");
    let result = Command::new(&args.yosys)
        .arg("-q")
        .arg("-p")
        .arg(&script)
        .arg("-o")
        .arg(&output)
        .arg(&args.source)
        .output()
        .map_err(|e| CliError::YosysLaunch {
            binary: args.yosys.clone(),
            source: e,
        })?;

    if !result.status.success() {
        return Err(CliError::YosysFailed {
            status: result.status,
            stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
        });
    }

    if !global.quiet {
        eprintln!("wrote {}", output.display());
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_list_is_well_formed() {
        let script = SYNTH_PASSES.join("; ");
        assert!(script.starts_with("proc; flatten"));
        assert!(script.ends_with("clean; check"));
        // No pass should carry stray separators of its own.
        for pass in SYNTH_PASSES {
            assert!(!pass.contains(';'));
        }
    }

    #[test]
    fn missing_binary_is_a_launch_error() {
        let args = CompileArgs {
            source: "missing.v".into(),
            output: None,
            yosys: "/nonexistent/yosys".into(),
        };
        let global = GlobalArgs {
            quiet: true,
            verbose: false,
        };
        assert!(matches!(
            run(&args, &global),
            Err(CliError::YosysLaunch { .. })
        ));
    }
}
