use anchor_lang::prelude::*;

/// Switch status enumeration
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchStatus {
    /// Funds are locked; the owner can still check in or cancel
    Active,
    /// The owner cancelled and took the balance back
    Cancelled,
    /// The beneficiary claimed the balance after the deadline
    Claimed,
}

impl SwitchStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SwitchStatus::Active)
    }
}

impl std::fmt::Display for SwitchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwitchStatus::Active => write!(f, "Active"),
            SwitchStatus::Cancelled => write!(f, "Cancelled"),
            SwitchStatus::Claimed => write!(f, "Claimed"),
        }
    }
}

/// Dead man's switch account
///
/// Holds lamports on behalf of `owner` until either the owner cancels, or
/// ledger time reaches `deadline` and `beneficiary` claims. The owner keeps
/// the switch alive by checking in, which pushes the deadline forward.
///
/// The account lives at the PDA `["switch", owner, seed]`. Terminal switches
/// are never closed, so an address can only ever hold one switch. The rent
/// reserve paid by the owner at creation stays locked in the account after
/// cancel or claim; only `balance` is paid out.
///
/// Field order is part of the external layout: indexers filter on `owner`
/// at byte 8 and `beneficiary` at byte 40.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct DeadManSwitch {
    /// Depositor and the only party allowed to check in or cancel
    pub owner: Pubkey,
    /// Party entitled to the balance once the deadline passes
    pub beneficiary: Pubkey,
    /// Unix timestamp at or after which `claim` is valid
    pub deadline: i64,
    /// Ledger time of the most recent check-in (creation counts as one)
    pub last_activity: i64,
    /// Escrowed lamports, excluding the rent reserve
    pub balance: u64,
    /// Current switch status
    pub status: SwitchStatus,
    /// Bump seed for PDA
    pub bump: u8,
    /// Caller-chosen seed for PDA derivation
    pub seed: String,
}

impl DeadManSwitch {
    /// Calculate space needed for an account with a seed of `seed_len` bytes
    pub const fn space(seed_len: usize) -> usize {
        8 + // discriminator
        32 + // owner
        32 + // beneficiary
        8 + // deadline
        8 + // last_activity
        8 + // balance
        1 + // status
        1 + // bump
        4 + seed_len // seed
    }

    /// A freshly allocated account deserializes with a zeroed owner
    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn is_active(&self) -> bool {
        self.status == SwitchStatus::Active
    }

    /// Whether `claim` would pass its time check at `now`
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.deadline
    }
}
