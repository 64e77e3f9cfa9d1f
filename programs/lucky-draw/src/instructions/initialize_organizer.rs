use crate::{constants::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct InitializeOrganizer<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = DISCRIMINATOR_SIZE + Organizer::INIT_SPACE,
        seeds = [ORGANIZER_SEED.as_bytes(), signer.key().as_ref()],
        bump
    )]
    pub organizer: Account<'info, Organizer>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeOrganizer>) -> Result<()> {
    let organizer = &mut ctx.accounts.organizer;

    // set fields
    organizer.authority = ctx.accounts.signer.key();
    organizer.activity_counter = 0;
    organizer.bump = ctx.bumps.organizer;

    msg!("Organizer initialized for {}", organizer.authority);

    Ok(())
}
