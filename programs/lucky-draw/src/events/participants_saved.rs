use anchor_lang::prelude::*;

#[event]
pub struct ParticipantsSaved {
    pub activity: Pubkey,
    pub batch_len: u32,
    pub total: u32,    // Roster size after the batch.
    pub replaced: bool, // Whether the batch started a new roster.
}
