use crate::{constants::*, error::LuckyDrawError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(participants: Vec<Participant>, replace: bool)]
pub struct SaveParticipants<'info> {
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

    #[account(
        mut,
        has_one = activity @ LuckyDrawError::ActivityNotFound,
        seeds = [ROSTER_SEED.as_bytes(), activity.key().as_ref()],
        bump = roster.bump,
        realloc = ParticipantRoster::space_for(
            (if replace { 0 } else { roster.participants.len() }) + participants.len()
        ),
        realloc::payer = authority,
        realloc::zero = false
    )]
    pub roster: Account<'info, ParticipantRoster>,

    pub system_program: Program<'info, System>,
}

impl<'info> SaveParticipants<'info> {
    pub fn validate(&self, participants: &[Participant]) -> Result<()> {
        require!(
            participants.len() <= PARTICIPANT_BATCH_SIZE,
            LuckyDrawError::BatchTooLarge
        );

        Ok(())
    }
}

/// Writes one batch of a roster save. The first batch of a save passes
/// `replace` so the previous roster is dropped.
pub fn handler(
    ctx: Context<SaveParticipants>,
    participants: Vec<Participant>,
    replace: bool,
) -> Result<()> {
    // validate
    ctx.accounts.validate(&participants)?;

    let roster = &mut ctx.accounts.roster;
    roster.apply_batch(&participants, replace)?;

    let total =
        u32::try_from(roster.participants.len()).map_err(|_| LuckyDrawError::Overflow)?;

    // set activity fields
    let activity = &mut ctx.accounts.activity;
    activity.participant_count = total;
    activity.updated_at = Clock::get()?.unix_timestamp;

    // emit event
    emit!(ParticipantsSaved {
        activity: activity.key(),
        batch_len: participants.len() as u32,
        total,
        replaced: replace,
    });

    Ok(())
}
