use anchor_lang::prelude::*;
use crate::state::*;
use crate::errors::*;
use crate::constants::*;
use crate::events::*;
use crate::clock::ledger_time;
use crate::machine::{self, Transfer, Transition};
use crate::instructions::utils::*;

/// Beneficiary withdraws the whole balance once ledger time reaches the deadline
#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut)]
    pub beneficiary: Signer<'info>,

    #[account(
        mut,
        seeds = [seeds::SWITCH, switch.owner.as_ref(), switch.seed.as_bytes()],
        bump = switch.bump
    )]
    pub switch: Account<'info, DeadManSwitch>,
}

pub fn handler(ctx: Context<Claim>) -> Result<()> {
    let now = ledger_time()?;
    let beneficiary = ctx.accounts.beneficiary.key();
    let applied = machine::apply(
        Some(&*ctx.accounts.switch),
        &Transition::Claim,
        &beneficiary,
        now,
    )?;

    let mut amount = 0;
    if let Some(Transfer::Out { to, lamports }) = applied.transfer {
        require_keys_eq!(to, beneficiary, SwitchError::Unauthorized);
        pay_out(
            &ctx.accounts.switch.to_account_info(),
            &ctx.accounts.beneficiary.to_account_info(),
            lamports,
        )?;
        amount = lamports;
    }
    ctx.accounts.switch.set_inner(applied.switch);

    emit!(SwitchClaimedEvent {
        switch: ctx.accounts.switch.key(),
        beneficiary,
        amount,
        claimed_at: now,
    });

    msg!(
        "Switch {} claimed by {}: {} lamports at {}",
        ctx.accounts.switch.key(),
        beneficiary,
        amount,
        now,
    );

    Ok(())
}
