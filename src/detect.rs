//! Change detection between the last recorded and the current address.

use crate::history::Observation;

/// Result of comparing the current address with the recorded history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// Nothing has been recorded yet.
    FirstObservation,

    /// The current address equals the last recorded one.
    Unchanged {
        /// The last recorded observation.
        previous: Observation,
    },

    /// The current address differs from the last recorded one.
    Changed {
        /// The last recorded observation.
        previous: Observation,
    },
}

/// Compares `current` against the address of `latest`.
///
/// Comparison is exact string equality on the address field.
#[must_use]
pub fn detect(latest: Option<Observation>, current: &str) -> Detection {
    match latest {
        None => Detection::FirstObservation,
        Some(previous) if previous.address == current => Detection::Unchanged { previous },
        Some(previous) => Detection::Changed { previous },
    }
}
