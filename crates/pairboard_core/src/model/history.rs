//! Pairing history records.

use crate::model::project::Person;
use serde::{Deserialize, Serialize};

/// Immutable record of one board's committed pairing.
///
/// The remote service creates these when a pairing is saved; the local log is
/// append-only and entries are never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingHistoryEntry {
    /// Board name at the time the pairing was recorded.
    pub pairing_board_name: String,
    /// People who were paired on that board.
    pub people: Vec<Person>,
    /// Unix epoch milliseconds of the recording.
    pub pairing_time: i64,
}
