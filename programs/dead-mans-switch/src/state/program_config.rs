use anchor_lang::prelude::*;

use crate::constants::seeds;

/// Program configuration account
#[account]
#[derive(Debug)]
pub struct ProgramConfig {
    /// Program authority
    pub authority: Pubkey,
    /// Whether new switches and deposits are refused
    pub paused: bool,
    /// Bump seed for PDA
    pub bump: u8,
}

impl ProgramConfig {
    /// Calculate space needed for account
    pub const fn space() -> usize {
        8 + // discriminator
        32 + // authority
        1 + // paused
        1 // bump
    }

    /// Program config PDA seed
    pub const SEED: &'static [u8] = seeds::PROGRAM_CONFIG;
}
