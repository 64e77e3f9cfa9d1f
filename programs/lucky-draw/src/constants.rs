use anchor_lang::prelude::*;

/// PDA Seeds
#[constant]
pub const ORGANIZER_SEED: &str = "organizer";
#[constant]
pub const ACTIVITY_SEED: &str = "activity";
#[constant]
pub const ROSTER_SEED: &str = "roster";
#[constant]
pub const WINNER_LOG_SEED: &str = "winner_log";

/// Account layout
pub const DISCRIMINATOR_SIZE: usize = 8;

/// Field limits
pub const MAX_ID_LEN: usize = 16;
pub const MAX_NAME_LEN: usize = 32;
pub const MAX_ACTIVITY_NAME_LEN: usize = 64;
pub const MAX_PRIZE_NAME_LEN: usize = 32;
pub const MAX_COLOR_LEN: usize = 16;
pub const MAX_ICON_LEN: usize = 24;

/// Collection limits
pub const MAX_PRIZES: usize = 16;
pub const MAX_PARTICIPANTS: usize = 1000;
pub const MAX_WINNER_RECORDS: usize = 1000;

/// Store writes are split into batches of this many entries
pub const PARTICIPANT_BATCH_SIZE: usize = 20;
pub const WINNER_BATCH_SIZE: usize = 20;

/// Default number of activities returned by a listing
pub const ACTIVITY_LIST_LIMIT: usize = 20;

/// Generated ids: base-36, fixed length
pub const GENERATED_ID_LEN: usize = 7;
pub const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Icon given to prizes rebuilt from a winner log entry
pub const DEFAULT_PRIZE_ICON: &str = "fa-medal";
