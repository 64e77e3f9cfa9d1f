use crate::{constants::*, error::LuckyDrawError, state::*};
use anchor_lang::prelude::*;

/// Append-only winner history of one activity.
#[account]
pub struct WinnerLog {
    pub activity: Pubkey,         // The activity this log belongs to.
    pub records: Vec<WinnerEntry>, // Saved records in insertion order.
    pub bump: u8,                 // A bump seed for PDA.
}

impl WinnerLog {
    pub const BASE_SPACE: usize = DISCRIMINATOR_SIZE + 32 + 4 + 1;

    pub fn space_for(entries: usize) -> usize {
        Self::BASE_SPACE + entries * WinnerEntry::INIT_SPACE
    }

    /// Merges one write batch into the log. Entries already present (same
    /// participant and prize) are skipped, so re-saving a history is harmless.
    /// Returns how many entries were appended.
    pub fn append_batch(&mut self, batch: &[WinnerEntry]) -> Result<u32> {
        require!(
            batch.len() <= WINNER_BATCH_SIZE,
            LuckyDrawError::BatchTooLarge
        );

        for entry in batch {
            entry.validate()?;
        }

        let mut fresh: Vec<&WinnerEntry> = Vec::with_capacity(batch.len());
        for entry in batch {
            let known = self.records.iter().any(|existing| existing.same_draw(entry))
                || fresh.iter().any(|pending| pending.same_draw(entry));
            if !known {
                fresh.push(entry);
            }
        }

        require!(
            self.records.len() + fresh.len() <= MAX_WINNER_RECORDS,
            LuckyDrawError::TooManyWinnerRecords
        );

        let appended = u32::try_from(fresh.len()).map_err(|_| LuckyDrawError::Overflow)?;
        self.records.extend(fresh.into_iter().cloned());

        Ok(appended)
    }
}
