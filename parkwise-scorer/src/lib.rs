//! Weighted multi-criteria scoring for Parkwise.
//!
//! [`WeightedScorer`] implements the [`Scorer`](parkwise_core::Scorer) trait
//! by combining z-score normalised criteria with caller-supplied weights.
//! Composite criteria such as `time_to_destination` are the sum of their
//! parts' normalised values, so each leg is rescaled against its own spread
//! before the legs are added.
//!
//! # Examples
//!
//! ```
//! use parkwise_scorer::{Composite, WeightedScorer};
//!
//! # fn main() -> Result<(), parkwise_scorer::CompositeError> {
//! let accessible = Composite::new("accessible", ["handicap_spaces", "family_spaces"])?;
//! let scorer = WeightedScorer::new().with_composite(accessible)?;
//! assert!(scorer.composite_parts("time_to_destination").is_some());
//! assert!(scorer.composite_parts("accessible").is_some());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod composite;
mod error;
mod weighted;

pub use composite::Composite;
pub use error::CompositeError;
pub use weighted::WeightedScorer;

#[cfg(test)]
mod tests;
