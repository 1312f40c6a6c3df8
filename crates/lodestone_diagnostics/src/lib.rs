//! Diagnostic messages and the thread-safe sink that accumulates them.
//!
//! The graph builder and the placement engine report non-fatal conditions
//! (multiple tag matches, missing port offsets, degenerate energies) as
//! structured [`Diagnostic`] values emitted into a [`DiagnosticSink`]. Fatal
//! conditions are returned as errors by the operation itself; the sink never
//! carries control flow.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod severity;
pub mod sink;

pub use diagnostic::Diagnostic;
pub use severity::Severity;
pub use sink::DiagnosticSink;
