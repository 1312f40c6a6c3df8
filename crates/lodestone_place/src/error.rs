//! Error types for the placement engine.

use lodestone_graph::ComponentId;

/// Errors that can occur while optimizing a placement.
///
/// `UnknownComponent` and `PositionCountMismatch` are consistency errors:
/// they indicate a bug in the builder or the engine, not a user-input
/// problem, and always abort the run.
#[derive(Debug, thiserror::Error)]
pub enum PlaceError {
    /// An annealing option is outside its valid range.
    #[error("invalid annealing option: {0}")]
    InvalidOption(String),

    /// A connection references a component that is not in the circuit.
    #[error("connection {index} references unknown component {component}")]
    UnknownComponent {
        /// Index of the offending connection in the circuit.
        index: usize,
        /// The unresolvable component ID.
        component: ComponentId,
    },

    /// A layout's position table does not cover every component.
    #[error("layout has {positions} positions for {components} components")]
    PositionCountMismatch {
        /// Number of entries in the position table.
        positions: usize,
        /// Number of components in the circuit.
        components: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_option() {
        let err = PlaceError::InvalidOption("cooling must be in (0, 1]".into());
        assert_eq!(
            format!("{err}"),
            "invalid annealing option: cooling must be in (0, 1]"
        );
    }

    #[test]
    fn display_unknown_component() {
        let err = PlaceError::UnknownComponent {
            index: 3,
            component: ComponentId::from_raw(99),
        };
        assert_eq!(
            format!("{err}"),
            "connection 3 references unknown component 99"
        );
    }

    #[test]
    fn display_position_mismatch() {
        let err = PlaceError::PositionCountMismatch {
            positions: 2,
            components: 5,
        };
        assert!(format!("{err}").contains("2 positions for 5 components"));
    }
}
