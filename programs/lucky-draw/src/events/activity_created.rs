use anchor_lang::prelude::*;

#[event]
pub struct ActivityCreated {
    pub authority: Pubkey,
    pub activity: Pubkey,
    pub activity_id: u64,
    pub name: String,
    pub prize_count: u8,
    pub created_at: i64,
}
