//! Error types for graph construction.
//!
//! Every variant is terminal for the current build: the builder never
//! returns a partially wired circuit.

/// Errors that can occur while building a placement graph from a module.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A cell has a type tag with no registered footprint.
    #[error("cell '{cell}' has unknown cell kind '{kind}'")]
    UnknownCellKind {
        /// Name of the cell instance.
        cell: String,
        /// The unsupported type tag.
        kind: String,
    },

    /// A required parameter is absent or not an integer.
    #[error("cell '{cell}' is missing integer parameter '{parameter}'")]
    MissingParameter {
        /// Name of the cell instance.
        cell: String,
        /// Name of the missing parameter.
        parameter: String,
    },

    /// A semantic tag was not found anywhere in a cell's footprint.
    #[error("tag '{tag}' not found in footprint of cell '{cell}'")]
    MissingTag {
        /// Name of the cell instance.
        cell: String,
        /// The semantic location tag that produced no matches.
        tag: String,
    },

    /// A cell resolved to an empty port map.
    #[error("no ports resolved for cell '{cell}'")]
    NoPorts {
        /// Name of the cell instance.
        cell: String,
    },

    /// A net bit has no driving endpoint.
    #[error("bit {bit} of net '{net}' has no driver")]
    NoDriver {
        /// Name of the net.
        net: String,
        /// The dangling global bit index.
        bit: u64,
    },

    /// A net bit has no receiving endpoint.
    #[error("bit {bit} of net '{net}' has no receiver")]
    NoReceiver {
        /// Name of the net.
        net: String,
        /// The dangling global bit index.
        bit: u64,
    },
}
