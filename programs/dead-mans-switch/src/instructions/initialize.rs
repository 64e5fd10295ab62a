use anchor_lang::prelude::*;
use crate::state::*;
use crate::events::*;

/// Initialize program configuration
#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = ProgramConfig::space(),
        seeds = [ProgramConfig::SEED],
        bump
    )]
    pub program_config: Account<'info, ProgramConfig>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeConfig>) -> Result<()> {
    let program_config = &mut ctx.accounts.program_config;

    program_config.authority = ctx.accounts.authority.key();
    program_config.paused = false;
    program_config.bump = ctx.bumps.program_config;

    emit!(ConfigInitializedEvent {
        authority: program_config.authority,
    });

    msg!("Program config initialized, authority {}", program_config.authority);

    Ok(())
}
