//! Switch state machine.
//!
//! `apply` is a pure function of the persisted switch, the requested
//! transition, the signer and ledger time. It returns the replacement switch
//! and the single lamport movement the caller must perform, or an error with
//! nothing changed. Callers persist the result and move the lamports inside
//! one transaction.
//!
//! Checks run in a fixed order: existence, signer role, status, then
//! arguments and time. Status comes before time so that whichever of
//! `Cancel` / `Claim` lands second always fails with `NotActive`.

use anchor_lang::prelude::*;

use crate::errors::SwitchError;
use crate::guard;
use crate::locator;
use crate::state::{DeadManSwitch, SwitchStatus};

type MachineResult<T> = std::result::Result<T, SwitchError>;

/// A requested state change
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    Create {
        beneficiary: Pubkey,
        deadline: i64,
        seed: String,
        bump: u8,
    },
    Deposit {
        amount: u64,
    },
    CheckIn {
        new_deadline: i64,
    },
    UpdateBeneficiary {
        beneficiary: Pubkey,
    },
    Cancel,
    Claim,
}

/// Lamport movement that accompanies a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transfer {
    /// `lamports` move from `from` into the switch
    In { from: Pubkey, lamports: u64 },
    /// `lamports` move out of the switch to `to`
    Out { to: Pubkey, lamports: u64 },
}

/// Result of a successful transition
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Applied {
    pub switch: DeadManSwitch,
    pub transfer: Option<Transfer>,
}

/// Validates `transition` against `current` and returns the new state.
pub fn apply(
    current: Option<&DeadManSwitch>,
    transition: &Transition,
    signer: &Pubkey,
    now: i64,
) -> MachineResult<Applied> {
    let switch = match (current, transition) {
        (
            None,
            Transition::Create {
                beneficiary,
                deadline,
                seed,
                bump,
            },
        ) => return create(signer, beneficiary, *deadline, seed, *bump, now),
        (Some(_), Transition::Create { .. }) => return Err(SwitchError::AlreadyExists),
        (None, _) => return Err(SwitchError::NotFound),
        (Some(switch), _) => switch,
    };

    guard::authorize(transition, switch, signer)?;

    if !switch.is_active() {
        return Err(SwitchError::NotActive);
    }

    match transition {
        Transition::Create { .. } => Err(SwitchError::AlreadyExists),
        Transition::Deposit { amount } => deposit(switch, *amount),
        Transition::CheckIn { new_deadline } => check_in(switch, *new_deadline, now),
        Transition::UpdateBeneficiary { beneficiary } => update_beneficiary(switch, beneficiary),
        Transition::Cancel => Ok(settle(switch, SwitchStatus::Cancelled, switch.owner)),
        Transition::Claim => {
            if !switch.is_expired(now) {
                return Err(SwitchError::DeadlineNotReached);
            }
            Ok(settle(switch, SwitchStatus::Claimed, switch.beneficiary))
        }
    }
}

fn create(
    owner: &Pubkey,
    beneficiary: &Pubkey,
    deadline: i64,
    seed: &str,
    bump: u8,
    now: i64,
) -> MachineResult<Applied> {
    locator::validate_seed(seed)?;
    require_future(deadline, now)?;
    validate_beneficiary(owner, beneficiary)?;

    Ok(Applied {
        switch: DeadManSwitch {
            owner: *owner,
            beneficiary: *beneficiary,
            deadline,
            last_activity: now,
            balance: 0,
            status: SwitchStatus::Active,
            bump,
            seed: seed.to_string(),
        },
        transfer: None,
    })
}

fn deposit(switch: &DeadManSwitch, amount: u64) -> MachineResult<Applied> {
    if amount == 0 {
        return Err(SwitchError::InvalidAmount);
    }
    let balance = switch
        .balance
        .checked_add(amount)
        .ok_or(SwitchError::ArithmeticOverflow)?;

    Ok(Applied {
        switch: DeadManSwitch {
            balance,
            ..switch.clone()
        },
        transfer: Some(Transfer::In {
            from: switch.owner,
            lamports: amount,
        }),
    })
}

fn check_in(switch: &DeadManSwitch, new_deadline: i64, now: i64) -> MachineResult<Applied> {
    require_future(new_deadline, now)?;

    Ok(Applied {
        switch: DeadManSwitch {
            deadline: new_deadline,
            last_activity: switch.last_activity.max(now),
            ..switch.clone()
        },
        transfer: None,
    })
}

fn update_beneficiary(switch: &DeadManSwitch, beneficiary: &Pubkey) -> MachineResult<Applied> {
    validate_beneficiary(&switch.owner, beneficiary)?;

    Ok(Applied {
        switch: DeadManSwitch {
            beneficiary: *beneficiary,
            ..switch.clone()
        },
        transfer: None,
    })
}

/// Empties the switch into `recipient` and moves it to a terminal status.
/// An unfunded switch still terminates; there is just nothing to pay out.
fn settle(switch: &DeadManSwitch, status: SwitchStatus, recipient: Pubkey) -> Applied {
    let transfer = (switch.balance > 0).then_some(Transfer::Out {
        to: recipient,
        lamports: switch.balance,
    });

    Applied {
        switch: DeadManSwitch {
            balance: 0,
            status,
            ..switch.clone()
        },
        transfer,
    }
}

fn require_future(deadline: i64, now: i64) -> MachineResult<()> {
    if deadline <= now {
        return Err(SwitchError::InvalidDeadline);
    }
    Ok(())
}

fn validate_beneficiary(owner: &Pubkey, beneficiary: &Pubkey) -> MachineResult<()> {
    if *beneficiary == Pubkey::default() || beneficiary == owner {
        return Err(SwitchError::InvalidBeneficiary);
    }
    Ok(())
}
