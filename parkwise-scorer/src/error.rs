//! Errors raised while configuring composite criteria.

use thiserror::Error;

/// Errors returned by [`Composite::new`](crate::Composite::new) and
/// [`WeightedScorer::with_composite`](crate::WeightedScorer::with_composite).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositeError {
    /// The composite lists no parts.
    #[error("composite criterion '{name}' must have at least one part")]
    NoParts {
        /// Composite name.
        name: String,
    },
    /// A part names the composite itself or another composite.
    #[error("composite criterion '{name}' cannot contain composite '{part}'")]
    Nested {
        /// Composite being defined.
        name: String,
        /// Offending part.
        part: String,
    },
    /// The composite name is already a part of another composite.
    #[error("'{name}' is already a part of composite '{composite}'")]
    UsedAsPart {
        /// Composite being defined.
        name: String,
        /// Composite that already uses the name as a part.
        composite: String,
    },
}
