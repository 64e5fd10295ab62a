//! Dead man's switch escrow.
//!
//! An owner locks lamports in a switch and names a beneficiary. As long as
//! the owner keeps checking in before the deadline, nothing happens; once
//! ledger time reaches the deadline, the beneficiary may claim the whole
//! balance. The owner can cancel at any time while the switch is active.

use anchor_lang::prelude::*;

declare_id!("8hK7vGkWap7CwfWnZG8igqz5uxevUDTbhoeuCcwgvpYq");

pub mod clock;
pub mod constants;
pub mod errors;
pub mod events;
pub mod guard;
pub mod instructions;
#[cfg(not(target_os = "solana"))]
pub mod ledger;
pub mod locator;
pub mod machine;
pub mod state;

use instructions::*;

#[program]
pub mod dead_mans_switch {
    use super::*;

    /// Create the program config; the signer becomes its authority.
    pub fn initialize_config(ctx: Context<InitializeConfig>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Pause or resume creation of and deposits into switches.
    pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
        instructions::set_paused::handler(ctx, paused)
    }

    /// Create an empty switch at `["switch", owner, seed]`.
    pub fn create_switch(
        ctx: Context<CreateSwitch>,
        beneficiary: Pubkey,
        deadline: i64,
        seed: String,
    ) -> Result<()> {
        instructions::create_switch::handler(ctx, beneficiary, deadline, seed)
    }

    /// Owner adds lamports to the switch.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Owner moves the deadline to a later point in time.
    pub fn check_in(ctx: Context<CheckIn>, new_deadline: i64) -> Result<()> {
        instructions::check_in::handler(ctx, new_deadline)
    }

    /// Owner names a different beneficiary.
    pub fn update_beneficiary(ctx: Context<UpdateBeneficiary>, beneficiary: Pubkey) -> Result<()> {
        instructions::update_beneficiary::handler(ctx, beneficiary)
    }

    /// Owner ends the switch and takes the balance back.
    pub fn cancel_switch(ctx: Context<CancelSwitch>) -> Result<()> {
        instructions::cancel::handler(ctx)
    }

    /// Beneficiary takes the balance once the deadline has passed.
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::handler(ctx)
    }
}
