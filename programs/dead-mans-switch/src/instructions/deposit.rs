use anchor_lang::prelude::*;
use crate::state::*;
use crate::errors::*;
use crate::constants::*;
use crate::events::*;
use crate::clock::ledger_time;
use crate::machine::{self, Transfer, Transition};
use crate::instructions::utils::*;

/// Owner adds lamports to an active switch
#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [seeds::SWITCH, switch.owner.as_ref(), switch.seed.as_bytes()],
        bump = switch.bump
    )]
    pub switch: Account<'info, DeadManSwitch>,

    #[account(
        seeds = [ProgramConfig::SEED],
        bump = program_config.bump
    )]
    pub program_config: Account<'info, ProgramConfig>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require_not_paused(&ctx.accounts.program_config)?;

    let now = ledger_time()?;
    let owner = ctx.accounts.owner.key();
    let applied = machine::apply(
        Some(&*ctx.accounts.switch),
        &Transition::Deposit { amount },
        &owner,
        now,
    )?;

    if let Some(Transfer::In { from, lamports }) = applied.transfer {
        require_keys_eq!(from, owner, SwitchError::Unauthorized);
        transfer_native_sol(
            ctx.accounts.owner.to_account_info(),
            ctx.accounts.switch.to_account_info(),
            lamports,
            ctx.accounts.system_program.to_account_info(),
        )?;
    }
    ctx.accounts.switch.set_inner(applied.switch);

    let switch = &ctx.accounts.switch;
    emit!(FundsDepositedEvent {
        switch: switch.key(),
        owner,
        amount,
        balance: switch.balance,
    });

    msg!(
        "Switch {} funded with {} lamports, balance {}",
        switch.key(),
        amount,
        switch.balance,
    );

    Ok(())
}
