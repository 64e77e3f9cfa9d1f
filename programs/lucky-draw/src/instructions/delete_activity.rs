use crate::{constants::*, error::LuckyDrawError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct DeleteActivity<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        close = authority,
        has_one = authority @ LuckyDrawError::Unauthorized,
        seeds = [
            ACTIVITY_SEED.as_bytes(),
            activity.organizer.as_ref(),
            &activity.id.to_le_bytes()
        ],
        bump = activity.bump
    )]
    pub activity: Box<Account<'info, Activity>>,

    #[account(
        mut,
        close = authority,
        has_one = activity @ LuckyDrawError::ActivityNotFound,
        seeds = [ROSTER_SEED.as_bytes(), activity.key().as_ref()],
        bump = roster.bump
    )]
    pub roster: Account<'info, ParticipantRoster>,

    #[account(
        mut,
        close = authority,
        has_one = activity @ LuckyDrawError::ActivityNotFound,
        seeds = [WINNER_LOG_SEED.as_bytes(), activity.key().as_ref()],
        bump = winner_log.bump
    )]
    pub winner_log: Account<'info, WinnerLog>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<DeleteActivity>) -> Result<()> {
    let activity = &ctx.accounts.activity;

    msg!(
        "Deleting activity {} with {} participants and {} winners",
        activity.id,
        activity.participant_count,
        activity.winner_count
    );

    // emit event
    emit!(ActivityDeleted {
        authority: ctx.accounts.authority.key(),
        activity: activity.key(),
        activity_id: activity.id,
    });

    Ok(())
}
