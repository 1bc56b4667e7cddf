//! Participant records and roster sources.
//!
//! The engine consumes a roster as an ordered sequence of participants,
//! obtained once at startup. Two sources exist today: the built-in
//! placeholder generator used until a live registration feed is wired in,
//! and a JSON parser for rosters delivered as an array of
//! `{"name", "registration"}` objects.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use serde::{Deserialize, Serialize};

/// Error returned by [`roster_from_json`].
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// The document could not be parsed as a JSON array of participants.
    #[error("malformed roster document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A raffle participant. Immutable once sourced.
///
/// `registration` is the unique identity: pool membership and duplicate
/// detection compare registrations, never names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name shown in sidebars and exports.
    pub name: String,
    /// Unique registration code identifying the participant.
    pub registration: String,
}

/// Generate the built-in placeholder roster: `Participant 1..=count` with
/// zero-padded registration codes `REG00001..`.
///
/// Stands in for a live registration feed; swap in [`roster_from_json`]
/// once one exists.
#[must_use]
pub fn placeholder_roster(count: usize) -> Vec<Participant> {
    (1..=count)
        .map(|i| Participant {
            name: format!("Participant {i}"),
            registration: format!("REG{i:05}"),
        })
        .collect()
}

/// Parse a roster from a JSON array of `{"name", "registration"}` objects.
///
/// # Errors
///
/// Returns [`RosterError::Malformed`] if the document is not valid JSON or
/// does not match the participant shape.
pub fn roster_from_json(json: &str) -> Result<Vec<Participant>, RosterError> {
    Ok(serde_json::from_str(json)?)
}
