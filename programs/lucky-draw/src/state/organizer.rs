use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Organizer {
    pub authority: Pubkey,     // The wallet that owns every activity under this organizer.
    pub activity_counter: u64, // Incremental counter for new activity ids.
    pub bump: u8,              // A bump seed for PDA.
}
