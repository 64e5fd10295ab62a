use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::events::*;
use crate::clock::ledger_time;
use crate::locator;
use crate::machine::{self, Transition};
use crate::instructions::utils::*;

/// Create a switch at `["switch", owner, seed]`.
///
/// `init_if_needed` lets an existing address reach the handler, which
/// reports `AlreadyExists` instead of a raw system program failure. The seed
/// is length-checked inside the PDA constraint, since Anchor derives the
/// address before any other constraint runs.
#[derive(Accounts)]
#[instruction(beneficiary: Pubkey, deadline: i64, seed: String)]
pub struct CreateSwitch<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        space = DeadManSwitch::space(seed.len()),
        seeds = [seeds::SWITCH, owner.key().as_ref(), locator::seed_bytes(&seed)?],
        bump
    )]
    pub switch: Account<'info, DeadManSwitch>,

    #[account(
        seeds = [ProgramConfig::SEED],
        bump = program_config.bump
    )]
    pub program_config: Account<'info, ProgramConfig>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateSwitch>,
    beneficiary: Pubkey,
    deadline: i64,
    seed: String,
) -> Result<()> {
    require_not_paused(&ctx.accounts.program_config)?;

    let now = ledger_time()?;
    let owner = ctx.accounts.owner.key();
    let current: DeadManSwitch = (*ctx.accounts.switch).clone();
    let transition = Transition::Create {
        beneficiary,
        deadline,
        seed,
        bump: ctx.bumps.switch,
    };

    let applied = machine::apply(
        current.is_initialized().then_some(&current),
        &transition,
        &owner,
        now,
    )?;
    ctx.accounts.switch.set_inner(applied.switch);

    let switch = &ctx.accounts.switch;
    emit!(SwitchCreatedEvent {
        switch: switch.key(),
        owner,
        beneficiary: switch.beneficiary,
        deadline: switch.deadline,
        seed: switch.seed.clone(),
    });

    msg!(
        "Switch {} created by {}: beneficiary {}, deadline {}",
        switch.key(),
        owner,
        switch.beneficiary,
        switch.deadline,
    );

    Ok(())
}
