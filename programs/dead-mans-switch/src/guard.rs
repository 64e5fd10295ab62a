//! Signer checks that run before any transition logic.

use anchor_lang::prelude::*;

use crate::errors::SwitchError;
use crate::machine::Transition;
use crate::state::DeadManSwitch;

/// Party a transition must be signed by
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Owner,
    Beneficiary,
}

/// Role required to sign `transition`.
///
/// `Create` maps to `Owner`: whoever creates a switch becomes its owner, and
/// the switch address is derived from that signer's key.
pub fn required_role(transition: &Transition) -> Role {
    match transition {
        Transition::Claim => Role::Beneficiary,
        Transition::Create { .. }
        | Transition::Deposit { .. }
        | Transition::CheckIn { .. }
        | Transition::UpdateBeneficiary { .. }
        | Transition::Cancel => Role::Owner,
    }
}

/// Rejects `signer` unless it holds the role `transition` requires on `switch`.
pub fn authorize(
    transition: &Transition,
    switch: &DeadManSwitch,
    signer: &Pubkey,
) -> std::result::Result<Role, SwitchError> {
    let role = required_role(transition);
    let expected = match role {
        Role::Owner => &switch.owner,
        Role::Beneficiary => &switch.beneficiary,
    };
    if expected != signer {
        return Err(SwitchError::Unauthorized);
    }
    Ok(role)
}
