//! Error types for netlist parsing and validation.

/// Errors that can occur when parsing or validating a synthesis netlist.
#[derive(Debug, thiserror::Error)]
pub enum NetlistError {
    /// The JSON document could not be deserialized.
    #[error("failed to parse netlist JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A binary-string parameter value does not fit in an `i64`.
    #[error("cell '{cell}' parameter '{parameter}': binary value '{value}' exceeds the representable integer range")]
    BinaryLiteralOverflow {
        /// Name of the cell instance.
        cell: String,
        /// Name of the parameter.
        parameter: String,
        /// The offending binary string.
        value: String,
    },

    /// A connection-list element is a string that is neither `"0"` nor `"1"`.
    #[error("cell '{cell}' port '{port}': invalid bit literal '{literal}' (expected \"0\" or \"1\")")]
    InvalidBitLiteral {
        /// Name of the cell instance.
        cell: String,
        /// Name of the cell port.
        port: String,
        /// The offending literal.
        literal: String,
    },

    /// A requested module name does not exist in the document.
    #[error("unknown module '{0}'")]
    UnknownModule(String),

    /// No module name was given and the document does not contain exactly one.
    #[error("netlist contains {0} modules; a module name must be selected")]
    AmbiguousTopModule(usize),
}
