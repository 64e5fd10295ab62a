use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::events::*;
use crate::clock::ledger_time;
use crate::machine::{self, Transition};

#[derive(Accounts)]
pub struct UpdateBeneficiary<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [seeds::SWITCH, switch.owner.as_ref(), switch.seed.as_bytes()],
        bump = switch.bump
    )]
    pub switch: Account<'info, DeadManSwitch>,
}

pub fn handler(ctx: Context<UpdateBeneficiary>, beneficiary: Pubkey) -> Result<()> {
    let now = ledger_time()?;
    let owner = ctx.accounts.owner.key();
    let previous = ctx.accounts.switch.beneficiary;
    let applied = machine::apply(
        Some(&*ctx.accounts.switch),
        &Transition::UpdateBeneficiary { beneficiary },
        &owner,
        now,
    )?;
    ctx.accounts.switch.set_inner(applied.switch);

    emit!(BeneficiaryUpdatedEvent {
        switch: ctx.accounts.switch.key(),
        previous,
        beneficiary,
    });

    msg!(
        "Switch {} beneficiary changed from {} to {}",
        ctx.accounts.switch.key(),
        previous,
        beneficiary,
    );

    Ok(())
}
