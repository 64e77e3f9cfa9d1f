use crate::{constants::*, error::LuckyDrawError, state::*};
use anchor_lang::prelude::*;

/// Saved participant list of one activity. Grows by reallocation, so its
/// space is computed from the entry count rather than a fixed maximum.
#[account]
pub struct ParticipantRoster {
    pub activity: Pubkey,               // The activity this roster belongs to.
    pub participants: Vec<Participant>, // Participants still in the pool when saved.
    pub bump: u8,                       // A bump seed for PDA.
}

impl ParticipantRoster {
    pub const BASE_SPACE: usize = DISCRIMINATOR_SIZE + 32 + 4 + 1;

    pub fn space_for(entries: usize) -> usize {
        Self::BASE_SPACE + entries * Participant::INIT_SPACE
    }

    /// Applies one write batch. `replace` starts the roster over, later
    /// batches of the same save append.
    pub fn apply_batch(&mut self, batch: &[Participant], replace: bool) -> Result<()> {
        require!(
            batch.len() <= PARTICIPANT_BATCH_SIZE,
            LuckyDrawError::BatchTooLarge
        );

        let kept = if replace { 0 } else { self.participants.len() };
        require!(
            kept + batch.len() <= MAX_PARTICIPANTS,
            LuckyDrawError::TooManyParticipants
        );

        for (index, participant) in batch.iter().enumerate() {
            participant.validate()?;

            let already_saved = !replace && self.participants.contains(participant);
            require!(
                !already_saved && !batch[..index].contains(participant),
                LuckyDrawError::DuplicateParticipantId
            );
        }

        if replace {
            self.participants.clear();
        }
        self.participants.extend_from_slice(batch);

        Ok(())
    }
}
