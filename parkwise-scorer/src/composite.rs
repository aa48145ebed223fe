//! Derived criteria built from the normalised values of their parts.

use parkwise_core::criteria::{TIME_FROM_FACILITY, TIME_TO_DESTINATION, TIME_TO_FACILITY};

use crate::CompositeError;

/// A named criterion whose normalised value is the sum of its parts'
/// normalised values.
///
/// Each part is normalised against its own population statistics before
/// summing; the raw part values are never added together first.
///
/// # Examples
/// ```
/// use parkwise_scorer::Composite;
///
/// let composite = Composite::time_to_destination();
/// assert_eq!(composite.name(), "time_to_destination");
/// assert_eq!(composite.parts(), ["time_to_facility", "time_from_facility"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite {
    name: String,
    parts: Vec<String>,
}

impl Composite {
    /// Validate and construct a composite.
    ///
    /// # Errors
    /// [`CompositeError::NoParts`] for an empty part list and
    /// [`CompositeError::Nested`] when a part repeats the composite's name.
    pub fn new<I, P>(name: impl Into<String>, parts: I) -> Result<Self, CompositeError>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let composite: String = name.into();
        let part_names: Vec<String> = parts.into_iter().map(Into::into).collect();
        if part_names.is_empty() {
            return Err(CompositeError::NoParts { name: composite });
        }
        if part_names.contains(&composite) {
            return Err(CompositeError::Nested {
                part: composite.clone(),
                name: composite,
            });
        }
        Ok(Self {
            name: composite,
            parts: part_names,
        })
    }

    /// Drive plus walk time: `time_to_facility + time_from_facility`.
    #[must_use]
    pub fn time_to_destination() -> Self {
        Self {
            name: TIME_TO_DESTINATION.to_owned(),
            parts: vec![TIME_TO_FACILITY.to_owned(), TIME_FROM_FACILITY.to_owned()],
        }
    }

    /// Composite name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Part names, in definition order.
    #[must_use]
    pub fn parts(&self) -> &[String] {
        &self.parts
    }
}
