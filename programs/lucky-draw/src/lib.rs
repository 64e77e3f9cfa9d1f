#![allow(unexpected_cfgs)]
#![allow(deprecated)]

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod session;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("LkyDrwGx1VbS6ZfU3zXcFq3YhT8m5RnWd2KpJc4aN7e");

#[program]
pub mod lucky_draw {
    use super::*;

    pub fn initialize_organizer(ctx: Context<InitializeOrganizer>) -> Result<()> {
        initialize_organizer::handler(ctx)
    }

    pub fn create_activity(
        ctx: Context<CreateActivity>,
        name: String,
        prizes: Vec<Prize>,
    ) -> Result<u64> {
        create_activity::handler(ctx, name, prizes)
    }

    pub fn save_participants(
        ctx: Context<SaveParticipants>,
        participants: Vec<Participant>,
        replace: bool,
    ) -> Result<()> {
        save_participants::handler(ctx, participants, replace)
    }

    pub fn save_winner_records(
        ctx: Context<SaveWinnerRecords>,
        records: Vec<WinnerEntry>,
    ) -> Result<()> {
        save_winner_records::handler(ctx, records)
    }

    pub fn delete_activity(ctx: Context<DeleteActivity>) -> Result<()> {
        delete_activity::handler(ctx)
    }
}
