//! Shared primitives for the Lodestone toolchain.
//!
//! Provides the integer 2D vector used for grid positions and component
//! sizes. Consistency failures are reported through the per-crate error
//! enums (`GraphError`, `PlaceError`), not through a shared error type.

#![warn(missing_docs)]

pub mod vec2;

pub use vec2::Vec2;
