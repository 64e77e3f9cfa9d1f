use crate::{constants::*, error::LuckyDrawError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct CreateActivity<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [ORGANIZER_SEED.as_bytes(), signer.key().as_ref()],
        bump = organizer.bump
    )]
    pub organizer: Account<'info, Organizer>,

    #[account(
        init,
        payer = signer,
        space = DISCRIMINATOR_SIZE + Activity::INIT_SPACE,
        seeds = [
            ACTIVITY_SEED.as_bytes(),
            organizer.key().as_ref(),
            &(organizer.activity_counter + 1).to_le_bytes()
        ],
        bump
    )]
    pub activity: Box<Account<'info, Activity>>,

    #[account(
        init,
        payer = signer,
        space = ParticipantRoster::space_for(0),
        seeds = [ROSTER_SEED.as_bytes(), activity.key().as_ref()],
        bump
    )]
    pub roster: Account<'info, ParticipantRoster>,

    #[account(
        init,
        payer = signer,
        space = WinnerLog::space_for(0),
        seeds = [WINNER_LOG_SEED.as_bytes(), activity.key().as_ref()],
        bump
    )]
    pub winner_log: Account<'info, WinnerLog>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateActivity<'info> {
    pub fn validate(&self, name: &str, prizes: &[Prize]) -> Result<()> {
        require!(
            self.signer.key() == self.organizer.authority,
            LuckyDrawError::Unauthorized
        );

        Activity::validate_config(name, prizes)?;

        Ok(())
    }
}

pub fn handler(ctx: Context<CreateActivity>, name: String, prizes: Vec<Prize>) -> Result<u64> {
    // validate
    ctx.accounts.validate(&name, &prizes)?;

    let now = Clock::get()?.unix_timestamp;
    let activity_key = ctx.accounts.activity.key();
    let organizer = &mut ctx.accounts.organizer;
    let activity = &mut ctx.accounts.activity;

    // set fields
    activity.id = organizer
        .activity_counter
        .checked_add(1)
        .ok_or(LuckyDrawError::Overflow)?;
    activity.organizer = organizer.key();
    activity.authority = ctx.accounts.signer.key();
    activity.name = name.trim().to_string();
    activity.prizes = prizes;
    activity.participant_count = 0;
    activity.winner_count = 0;
    activity.created_at = now;
    activity.updated_at = now;
    activity.bump = ctx.bumps.activity;

    let roster = &mut ctx.accounts.roster;
    roster.activity = activity_key;
    roster.participants = vec![];
    roster.bump = ctx.bumps.roster;

    let winner_log = &mut ctx.accounts.winner_log;
    winner_log.activity = activity_key;
    winner_log.records = vec![];
    winner_log.bump = ctx.bumps.winner_log;

    // set organizer fields
    organizer.activity_counter = activity.id;

    // emit event
    emit!(ActivityCreated {
        authority: activity.authority,
        activity: activity_key,
        activity_id: activity.id,
        name: activity.name.clone(),
        prize_count: activity.prizes.len() as u8,
        created_at: now,
    });

    Ok(activity.id)
}
