use anchor_lang::prelude::*;
use crate::state::*;
use crate::errors::*;
use crate::constants::*;
use crate::events::*;
use crate::clock::ledger_time;
use crate::machine::{self, Transfer, Transition};
use crate::instructions::utils::*;

/// Owner ends an active switch and takes the whole balance back.
///
/// The account is kept as a `Cancelled` tombstone rather than closed, so the
/// address cannot be re-created and an old claim cannot be replayed.
#[derive(Accounts)]
pub struct CancelSwitch<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [seeds::SWITCH, switch.owner.as_ref(), switch.seed.as_bytes()],
        bump = switch.bump
    )]
    pub switch: Account<'info, DeadManSwitch>,
}

pub fn handler(ctx: Context<CancelSwitch>) -> Result<()> {
    let now = ledger_time()?;
    let owner = ctx.accounts.owner.key();
    let applied = machine::apply(
        Some(&*ctx.accounts.switch),
        &Transition::Cancel,
        &owner,
        now,
    )?;

    let mut refunded = 0;
    if let Some(Transfer::Out { to, lamports }) = applied.transfer {
        require_keys_eq!(to, owner, SwitchError::Unauthorized);
        pay_out(
            &ctx.accounts.switch.to_account_info(),
            &ctx.accounts.owner.to_account_info(),
            lamports,
        )?;
        refunded = lamports;
    }
    ctx.accounts.switch.set_inner(applied.switch);

    emit!(SwitchCancelledEvent {
        switch: ctx.accounts.switch.key(),
        owner,
        refunded,
    });

    msg!(
        "Switch {} cancelled by owner, {} lamports refunded",
        ctx.accounts.switch.key(),
        refunded,
    );

    Ok(())
}
