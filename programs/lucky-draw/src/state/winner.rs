use crate::{constants::*, error::LuckyDrawError, state::*};
use anchor_lang::prelude::*;

/// A confirmed win. Records are kept in insertion order; one confirmation
/// stamps every winner of the round with the same timestamp.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinnerRecord {
    pub participant: Participant,
    pub prize: Prize,
    pub timestamp: i64,
}

impl WinnerRecord {
    pub fn new(participant: Participant, prize: Prize, timestamp: i64) -> Self {
        Self {
            participant,
            prize,
            timestamp,
        }
    }

    /// Same participant winning the same prize.
    pub fn same_draw(&self, other: &WinnerRecord) -> bool {
        self.participant.id == other.participant.id && self.prize.id == other.prize.id
    }
}

/// Flat persisted form of a `WinnerRecord`, as stored in the winner log.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct WinnerEntry {
    // --- Participant snapshot ---
    #[max_len(MAX_ID_LEN)]
    pub participant_id: String,
    #[max_len(MAX_NAME_LEN)]
    pub participant_name: String,

    // --- Prize snapshot ---
    #[max_len(MAX_ID_LEN)]
    pub prize_id: String,
    #[max_len(MAX_PRIZE_NAME_LEN)]
    pub prize_name: String,
    pub prize_level: u8,
    #[max_len(MAX_COLOR_LEN)]
    pub prize_color: String,

    // --- Metadata ---
    pub timestamp: i64,
}

impl WinnerEntry {
    pub fn same_draw(&self, other: &WinnerEntry) -> bool {
        self.participant_id == other.participant_id && self.prize_id == other.prize_id
    }

    pub fn validate(&self) -> Result<()> {
        require!(
            !self.participant_id.is_empty()
                && self.participant_id.len() <= MAX_ID_LEN
                && self.participant_name.len() <= MAX_NAME_LEN
                && !self.prize_id.is_empty()
                && self.prize_id.len() <= MAX_ID_LEN
                && self.prize_name.len() <= MAX_PRIZE_NAME_LEN
                && self.prize_color.len() <= MAX_COLOR_LEN,
            LuckyDrawError::InvalidWinnerRecord
        );

        Ok(())
    }

    /// Rebuilds the record against the configured prizes. An unknown prize id
    /// gets a placeholder built from the snapshot so history stays displayable.
    pub fn to_record(&self, known_prizes: &[Prize]) -> WinnerRecord {
        let prize = known_prizes
            .iter()
            .find(|prize| prize.id == self.prize_id)
            .cloned()
            .unwrap_or_else(|| {
                Prize::placeholder(
                    &self.prize_id,
                    &self.prize_name,
                    self.prize_level,
                    &self.prize_color,
                )
            });

        WinnerRecord {
            participant: Participant {
                id: self.participant_id.clone(),
                name: self.participant_name.clone(),
            },
            prize,
            timestamp: self.timestamp,
        }
    }
}

impl From<&WinnerRecord> for WinnerEntry {
    fn from(record: &WinnerRecord) -> Self {
        Self {
            participant_id: record.participant.id.clone(),
            participant_name: record.participant.name.clone(),
            prize_id: record.prize.id.clone(),
            prize_name: record.prize.name.clone(),
            prize_level: record.prize.level,
            prize_color: record.prize.color.clone(),
            timestamp: record.timestamp,
        }
    }
}
