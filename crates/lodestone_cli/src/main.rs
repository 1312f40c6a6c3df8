//! Lodestone CLI — the command-line front end for the Lodestone placer.
//!
//! Provides `lodestone compile` for synthesizing Verilog to a netlist JSON
//! document, `lodestone graph` for building the abstract placement circuit
//! from a netlist, and `lodestone place` for running the full
//! netlist-to-layout pipeline.

#![warn(missing_docs)]

mod compile;
mod error;
mod graph;
mod pipeline;
mod place;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

pub use error::CliError;

/// Lodestone — netlist placement by simulated annealing.
#[derive(Parser, Debug)]
#[command(name = "lodestone", version, about = "Lodestone placement toolchain")]
pub struct Cli {
    /// Suppress all diagnostics except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Also print note-level diagnostics (per-snapshot progress).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Synthesize a Verilog source file into a netlist JSON document.
    Compile(CompileArgs),
    /// Build the placement circuit from a netlist JSON document.
    Graph(GraphArgs),
    /// Build the circuit and optimize a layout for it.
    Place(PlaceArgs),
}

/// Arguments for the `lodestone compile` subcommand.
#[derive(Parser, Debug)]
pub struct CompileArgs {
    /// Verilog source file.
    pub source: PathBuf,

    /// Output path for the netlist JSON (default: source with `.json`).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to the yosys binary.
    #[arg(long, default_value = "yosys")]
    pub yosys: String,
}

/// Arguments for the `lodestone graph` subcommand.
#[derive(Parser, Debug)]
pub struct GraphArgs {
    /// Netlist JSON document produced by `compile`.
    pub netlist: PathBuf,

    /// Module to build (default: the document's sole module).
    #[arg(short, long)]
    pub module: Option<String>,

    /// Output path for the circuit JSON (default: stdout).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `lodestone place` subcommand.
#[derive(Parser, Debug)]
pub struct PlaceArgs {
    /// Netlist JSON document produced by `compile`.
    pub netlist: PathBuf,

    /// Module to place (default: the document's sole module).
    #[arg(short, long)]
    pub module: Option<String>,

    /// Number of annealing sweeps.
    #[arg(long, default_value_t = 10_000)]
    pub iterations: usize,

    /// Initial annealing temperature.
    #[arg(long, default_value_t = 1_000.0)]
    pub temperature: f64,

    /// Per-sweep cooling factor, in (0, 1].
    #[arg(long, default_value_t = 0.99)]
    pub cooling: f64,

    /// Random seed for reproducible runs (default: seeded from the OS).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Record a history snapshot every this many sweeps.
    #[arg(long, default_value_t = 100)]
    pub snapshot_period: usize,

    /// Output path for the layout-result JSON (default: stdout).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress warning- and note-level diagnostics.
    pub quiet: bool,
    /// Whether to print note-level diagnostics.
    pub verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
    };

    let result = match cli.command {
        Command::Compile(ref args) => compile::run(args, &global),
        Command::Graph(ref args) => graph::run(args, &global),
        Command::Place(ref args) => place::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
