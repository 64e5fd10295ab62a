//! Switch address derivation.
//!
//! A switch lives at the PDA `["switch", owner, seed]`, so any client can
//! recompute the address from the owner's key and the seed it chose.

use anchor_lang::prelude::*;

use crate::constants::{seeds, MAX_SEED_LEN};
use crate::errors::SwitchError;
use crate::state::DeadManSwitch;

pub fn validate_seed(seed: &str) -> std::result::Result<(), SwitchError> {
    if seed.len() > MAX_SEED_LEN {
        return Err(SwitchError::InvalidSeed);
    }
    Ok(())
}

/// Seed bytes for the on-chain PDA constraint. Oversized seeds are rejected
/// here, before the runtime tries to hash them.
pub fn seed_bytes(seed: &str) -> Result<&[u8]> {
    validate_seed(seed)?;
    Ok(seed.as_bytes())
}

/// Address and bump of the switch `owner` creates with `seed`.
pub fn derive_address(
    program_id: &Pubkey,
    owner: &Pubkey,
    seed: &str,
) -> std::result::Result<(Pubkey, u8), SwitchError> {
    validate_seed(seed)?;
    Ok(Pubkey::find_program_address(
        &[seeds::SWITCH, owner.as_ref(), seed.as_bytes()],
        program_id,
    ))
}

/// Re-derives the address from the stored owner, seed and bump.
pub fn verify_address(program_id: &Pubkey, switch: &DeadManSwitch, address: &Pubkey) -> bool {
    Pubkey::create_program_address(
        &[
            seeds::SWITCH,
            switch.owner.as_ref(),
            switch.seed.as_bytes(),
            &[switch.bump],
        ],
        program_id,
    )
    .map_or(false, |derived| derived == *address)
}
