use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::state::*;
use crate::errors::*;

/// Check that intake (new switches, deposits) is not paused
pub fn require_not_paused(program_config: &ProgramConfig) -> Result<()> {
    require!(!program_config.paused, SwitchError::ProgramPaused);
    Ok(())
}

/// Move lamports from a system-owned wallet into the switch via the system program
pub fn transfer_native_sol<'info>(
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    amount: u64,
    system_program: AccountInfo<'info>,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(system_program, system_program::Transfer { from, to }),
        amount,
    )
}

/// Debit the program-owned switch and credit `recipient` directly.
/// Only the escrowed balance moves; the rent reserve stays in the switch.
pub fn pay_out(switch: &AccountInfo, recipient: &AccountInfo, lamports: u64) -> Result<()> {
    let remaining = switch
        .lamports()
        .checked_sub(lamports)
        .ok_or(SwitchError::InsufficientFunds)?;
    let credited = recipient
        .lamports()
        .checked_add(lamports)
        .ok_or(SwitchError::ArithmeticOverflow)?;

    **switch.try_borrow_mut_lamports()? = remaining;
    **recipient.try_borrow_mut_lamports()? = credited;
    Ok(())
}
