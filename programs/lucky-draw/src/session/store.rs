use crate::state::*;
use anchor_lang::prelude::*;

/// Remote persistence for activities. Every call can fail on its own; nothing
/// is atomic across participants and winner records.
pub trait ActivityStore {
    /// Creates an activity with its tier configuration. Returns the new id.
    fn create_activity(&mut self, name: &str, prizes: &[Prize], now: i64) -> Result<u64>;

    /// Newest first, at most `limit` entries.
    fn list_activities(&self, limit: usize) -> Result<Vec<Activity>>;

    /// Replaces the saved roster.
    fn save_participants(&mut self, activity_id: u64, participants: &[Participant]) -> Result<()>;

    fn load_participants(&self, activity_id: u64) -> Result<Vec<Participant>>;

    /// Merges records into the winner log; entries already saved are skipped.
    fn save_winner_records(&mut self, activity_id: u64, records: &[WinnerRecord]) -> Result<()>;

    /// Saved records ordered by timestamp, rebuilt against `known_prizes`.
    fn load_winner_records(&self, activity_id: u64, known_prizes: &[Prize]) -> Result<Vec<WinnerRecord>>;

    /// Removes the activity together with its roster and winner log.
    fn delete_activity(&mut self, activity_id: u64) -> Result<()>;
}
