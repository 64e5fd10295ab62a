use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::events::*;
use crate::clock::ledger_time;
use crate::machine::{self, Transition};

/// Owner proves liveness and moves the deadline
#[derive(Accounts)]
pub struct CheckIn<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [seeds::SWITCH, switch.owner.as_ref(), switch.seed.as_bytes()],
        bump = switch.bump
    )]
    pub switch: Account<'info, DeadManSwitch>,
}

pub fn handler(ctx: Context<CheckIn>, new_deadline: i64) -> Result<()> {
    let now = ledger_time()?;
    let owner = ctx.accounts.owner.key();
    let applied = machine::apply(
        Some(&*ctx.accounts.switch),
        &Transition::CheckIn { new_deadline },
        &owner,
        now,
    )?;
    ctx.accounts.switch.set_inner(applied.switch);

    let switch = &ctx.accounts.switch;
    emit!(CheckedInEvent {
        switch: switch.key(),
        owner,
        deadline: switch.deadline,
        last_activity: switch.last_activity,
    });

    msg!(
        "Switch {} checked in at {}, new deadline {}",
        switch.key(),
        switch.last_activity,
        switch.deadline,
    );

    Ok(())
}
