//! The CLI's top-level error type.

use std::path::PathBuf;

/// Any failure a subcommand can surface to the user.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A file could not be read or written.
    #[error("cannot access {path}: {source}")]
    Io {
        /// The offending path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The synthesis tool could not be started.
    #[error("failed to launch '{binary}': {source}")]
    YosysLaunch {
        /// The binary that was invoked.
        binary: String,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// The synthesis tool ran but reported failure.
    #[error("yosys exited with {status}:\n{stderr}")]
    YosysFailed {
        /// The tool's exit status.
        status: std::process::ExitStatus,
        /// Captured standard error output.
        stderr: String,
    },

    /// The netlist document could not be parsed or validated.
    #[error(transparent)]
    Netlist(#[from] lodestone_netlist::NetlistError),

    /// The circuit could not be built from the module.
    #[error(transparent)]
    Graph(#[from] lodestone_graph::GraphError),

    /// The placement run failed.
    #[error(transparent)]
    Place(#[from] lodestone_place::PlaceError),

    /// Output serialization failed.
    #[error("cannot serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }
}
