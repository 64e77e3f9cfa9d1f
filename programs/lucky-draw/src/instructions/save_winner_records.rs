use crate::{constants::*, error::LuckyDrawError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(records: Vec<WinnerEntry>)]
pub struct SaveWinnerRecords<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        has_one = authority @ LuckyDrawError::Unauthorized,
        seeds = [
            ACTIVITY_SEED.as_bytes(),
            activity.organizer.as_ref(),
            &activity.id.to_le_bytes()
        ],
        bump = activity.bump
    )]
    pub activity: Box<Account<'info, Activity>>,

    // sized for the whole batch; skipped duplicates leave slack
    #[account(
        mut,
        has_one = activity @ LuckyDrawError::ActivityNotFound,
        seeds = [WINNER_LOG_SEED.as_bytes(), activity.key().as_ref()],
        bump = winner_log.bump,
        realloc = WinnerLog::space_for(winner_log.records.len() + records.len()),
        realloc::payer = authority,
        realloc::zero = false
    )]
    pub winner_log: Account<'info, WinnerLog>,

    pub system_program: Program<'info, System>,
}

impl<'info> SaveWinnerRecords<'info> {
    pub fn validate(&self, records: &[WinnerEntry]) -> Result<()> {
        require!(
            records.len() <= WINNER_BATCH_SIZE,
            LuckyDrawError::BatchTooLarge
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<SaveWinnerRecords>, records: Vec<WinnerEntry>) -> Result<()> {
    // validate
    ctx.accounts.validate(&records)?;

    let winner_log = &mut ctx.accounts.winner_log;
    let appended = winner_log.append_batch(&records)?;

    let total =
        u32::try_from(winner_log.records.len()).map_err(|_| LuckyDrawError::Overflow)?;

    // set activity fields
    let activity = &mut ctx.accounts.activity;
    activity.winner_count = total;
    activity.updated_at = Clock::get()?.unix_timestamp;

    // emit event
    emit!(WinnerRecordsSaved {
        activity: activity.key(),
        appended,
        total,
    });

    Ok(())
}
