use anchor_lang::prelude::*;

#[event]
pub struct ActivityDeleted {
    pub authority: Pubkey,
    pub activity: Pubkey,
    pub activity_id: u64,
}
