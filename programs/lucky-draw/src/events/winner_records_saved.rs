use anchor_lang::prelude::*;

#[event]
pub struct WinnerRecordsSaved {
    pub activity: Pubkey,
    pub appended: u32, // Entries new to the log; duplicates are skipped.
    pub total: u32,
}
