use anchor_lang::prelude::*;
use crate::state::*;
use crate::errors::*;
use crate::events::*;

/// Pause or resume intake. Exits are never paused.
#[derive(Accounts)]
pub struct SetPaused<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [ProgramConfig::SEED],
        bump = program_config.bump,
        has_one = authority @ SwitchError::Unauthorized,
    )]
    pub program_config: Account<'info, ProgramConfig>,
}

pub fn handler(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
    let program_config = &mut ctx.accounts.program_config;
    program_config.paused = paused;

    emit!(PauseUpdatedEvent {
        authority: program_config.authority,
        paused,
    });

    msg!("Intake {}", if paused { "paused" } else { "resumed" });

    Ok(())
}
