//! Boundary normalization of raw synthesis records.
//!
//! The synthesis tool emits parameter values as binary strings (`"0010"`)
//! and mixes `"0"`/`"1"` constant literals into connection lists. Consumers
//! expect integer parameters and validated literals, so every module passes
//! through [`Module::normalize`] exactly once before reaching the builder.

use crate::error::NetlistError;
use crate::types::{Module, NetBit, ParamValue};

impl Module {
    /// Normalizes all cell records in place.
    ///
    /// Binary-string parameter values (matching `^[01]+$`) are converted to
    /// integers; a value that does not fit in an `i64` is a fatal input
    /// error. Connection-list literals other than `"0"`/`"1"` are rejected.
    pub fn normalize(&mut self) -> Result<(), NetlistError> {
        for (cell_name, cell) in &mut self.cells {
            for (param_name, value) in &mut cell.parameters {
                if let ParamValue::Str(text) = value {
                    if is_binary_literal(text) {
                        let parsed = i64::from_str_radix(text, 2).map_err(|_| {
                            NetlistError::BinaryLiteralOverflow {
                                cell: cell_name.clone(),
                                parameter: param_name.clone(),
                                value: text.clone(),
                            }
                        })?;
                        *value = ParamValue::Int(parsed);
                    }
                }
            }

            for (port_name, bits) in &cell.connections {
                for bit in bits {
                    if let NetBit::Literal(lit) = bit {
                        if lit != "0" && lit != "1" {
                            return Err(NetlistError::InvalidBitLiteral {
                                cell: cell_name.clone(),
                                port: port_name.clone(),
                                literal: lit.clone(),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

fn is_binary_literal(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b == b'0' || b == b'1')
}
