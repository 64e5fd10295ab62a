use anchor_lang::prelude::*;

#[event]
pub struct ConfigInitializedEvent {
    pub authority: Pubkey,
}

#[event]
pub struct PauseUpdatedEvent {
    pub authority: Pubkey,
    pub paused: bool,
}

#[event]
pub struct SwitchCreatedEvent {
    pub switch: Pubkey,
    pub owner: Pubkey,
    pub beneficiary: Pubkey,
    pub deadline: i64,
    pub seed: String,
}

#[event]
pub struct FundsDepositedEvent {
    pub switch: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub balance: u64,
}

#[event]
pub struct CheckedInEvent {
    pub switch: Pubkey,
    pub owner: Pubkey,
    pub deadline: i64,
    pub last_activity: i64,
}

#[event]
pub struct BeneficiaryUpdatedEvent {
    pub switch: Pubkey,
    pub previous: Pubkey,
    pub beneficiary: Pubkey,
}

#[event]
pub struct SwitchCancelledEvent {
    pub switch: Pubkey,
    pub owner: Pubkey,
    pub refunded: u64,
}

#[event]
pub struct SwitchClaimedEvent {
    pub switch: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub claimed_at: i64,
}
