use crate::{constants::*, error::LuckyDrawError, state::*};
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Activity {
    // --- Identity ---
    pub id: u64,           // Activity id, taken from the organizer counter.
    pub organizer: Pubkey, // The organizer this activity was created under.
    pub authority: Pubkey, // The wallet allowed to write this activity.
    #[max_len(MAX_ACTIVITY_NAME_LEN)]
    pub name: String,

    // --- Prize Tiers ---
    #[max_len(MAX_PRIZES)]
    pub prizes: Vec<Prize>, // Tier configuration at creation time, in draw order.

    // --- Counters ---
    pub participant_count: u32, // Size of the saved roster.
    pub winner_count: u32,      // Size of the saved winner log.

    // --- Metadata ---
    pub created_at: i64,
    pub updated_at: i64,
    pub bump: u8,
}

impl Activity {
    pub fn validate_config(name: &str, prizes: &[Prize]) -> Result<()> {
        require!(
            !name.trim().is_empty() && name.len() <= MAX_ACTIVITY_NAME_LEN,
            LuckyDrawError::InvalidActivityName
        );

        Prize::validate_tiers(prizes)
    }
}
