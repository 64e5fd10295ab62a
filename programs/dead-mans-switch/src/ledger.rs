//! In-process model of the host ledger.
//!
//! `Ledger` runs requests through the same state machine as the on-chain
//! handlers and applies each one atomically: every check, including the
//! payer's wallet balance, completes before anything is written. Requests are
//! applied one at a time in submission order, which is the ordering guarantee
//! the chain gives per account. Wrap it in a `Mutex` to share it between
//! threads.

use std::collections::{BTreeMap, HashMap};

use anchor_lang::prelude::*;

use crate::clock::{LedgerClock, ManualClock};
use crate::constants::{BENEFICIARY_OFFSET, OWNER_OFFSET};
use crate::errors::SwitchError;
use crate::locator;
use crate::machine::{self, Transfer, Transition};
use crate::state::DeadManSwitch;

pub type LedgerResult<T> = std::result::Result<T, SwitchError>;

/// A transition as submitted by a client. `Create` carries no address: it is
/// derived from the signer and the seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SwitchRequest {
    Create {
        beneficiary: Pubkey,
        deadline: i64,
        seed: String,
    },
    Deposit {
        switch: Pubkey,
        amount: u64,
    },
    CheckIn {
        switch: Pubkey,
        new_deadline: i64,
    },
    UpdateBeneficiary {
        switch: Pubkey,
        beneficiary: Pubkey,
    },
    Cancel {
        switch: Pubkey,
    },
    Claim {
        switch: Pubkey,
    },
}

/// Outcome of a successful submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionResult {
    pub address: Pubkey,
    pub switch: DeadManSwitch,
    pub transfer: Option<Transfer>,
}

/// Raw byte-range filters, as an indexer would apply them to account data
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanFilter {
    Owner(Pubkey),
    Beneficiary(Pubkey),
}

impl ScanFilter {
    fn memcmp(&self) -> (usize, [u8; 32]) {
        match self {
            ScanFilter::Owner(key) => (OWNER_OFFSET, key.to_bytes()),
            ScanFilter::Beneficiary(key) => (BENEFICIARY_OFFSET, key.to_bytes()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Ledger<C: LedgerClock = ManualClock> {
    program_id: Pubkey,
    clock: C,
    switches: BTreeMap<Pubkey, DeadManSwitch>,
    wallets: HashMap<Pubkey, u64>,
}

impl<C: LedgerClock> Ledger<C> {
    pub fn new(program_id: Pubkey, clock: C) -> Self {
        Self {
            program_id,
            clock,
            switches: BTreeMap::new(),
            wallets: HashMap::new(),
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn now(&self) -> i64 {
        self.clock.unix_timestamp()
    }

    pub fn airdrop(&mut self, wallet: Pubkey, lamports: u64) {
        let balance = self.wallets.entry(wallet).or_default();
        *balance = balance.saturating_add(lamports);
    }

    pub fn wallet_balance(&self, wallet: &Pubkey) -> u64 {
        self.wallets.get(wallet).copied().unwrap_or_default()
    }

    pub fn derive_address(&self, owner: &Pubkey, seed: &str) -> LedgerResult<(Pubkey, u8)> {
        locator::derive_address(&self.program_id, owner, seed)
    }

    pub fn fetch(&self, address: &Pubkey) -> LedgerResult<DeadManSwitch> {
        self.switches
            .get(address)
            .cloned()
            .ok_or(SwitchError::NotFound)
    }

    /// Switches whose serialized account data matches `filter`.
    pub fn scan(&self, filter: &ScanFilter) -> Vec<(Pubkey, DeadManSwitch)> {
        let (offset, bytes) = filter.memcmp();
        self.switches
            .iter()
            .filter(|(_, switch)| {
                let mut data = Vec::with_capacity(DeadManSwitch::space(switch.seed.len()));
                switch.try_serialize(&mut data).is_ok()
                    && data.get(offset..offset + bytes.len()) == Some(&bytes[..])
            })
            .map(|(address, switch)| (*address, switch.clone()))
            .collect()
    }

    /// Active switches `beneficiary` could claim right now.
    pub fn claimable(&self, beneficiary: &Pubkey) -> Vec<Pubkey> {
        let now = self.now();
        self.scan(&ScanFilter::Beneficiary(*beneficiary))
            .into_iter()
            .filter(|(_, switch)| switch.is_active() && switch.is_expired(now))
            .map(|(address, _)| address)
            .collect()
    }

    /// Applies `request` signed by `signer`, or rejects it with nothing changed.
    pub fn submit(
        &mut self,
        request: SwitchRequest,
        signer: &Pubkey,
    ) -> LedgerResult<TransactionResult> {
        let (address, transition) = match request {
            SwitchRequest::Create {
                beneficiary,
                deadline,
                seed,
            } => {
                let (address, bump) = self.derive_address(signer, &seed)?;
                let transition = Transition::Create {
                    beneficiary,
                    deadline,
                    seed,
                    bump,
                };
                (address, transition)
            }
            SwitchRequest::Deposit { switch, amount } => (switch, Transition::Deposit { amount }),
            SwitchRequest::CheckIn {
                switch,
                new_deadline,
            } => (switch, Transition::CheckIn { new_deadline }),
            SwitchRequest::UpdateBeneficiary {
                switch,
                beneficiary,
            } => (switch, Transition::UpdateBeneficiary { beneficiary }),
            SwitchRequest::Cancel { switch } => (switch, Transition::Cancel),
            SwitchRequest::Claim { switch } => (switch, Transition::Claim),
        };

        let current = self.switches.get(&address);
        if let Some(switch) = current {
            if !locator::verify_address(&self.program_id, switch, &address) {
                return Err(SwitchError::NotFound);
            }
        }

        let applied = machine::apply(current, &transition, signer, self.now())?;

        let wallet_update = match applied.transfer {
            Some(Transfer::In { from, lamports }) => {
                let remaining = self
                    .wallet_balance(&from)
                    .checked_sub(lamports)
                    .ok_or(SwitchError::InsufficientFunds)?;
                Some((from, remaining))
            }
            Some(Transfer::Out { to, lamports }) => {
                let credited = self
                    .wallet_balance(&to)
                    .checked_add(lamports)
                    .ok_or(SwitchError::ArithmeticOverflow)?;
                Some((to, credited))
            }
            None => None,
        };

        if let Some((wallet, lamports)) = wallet_update {
            self.wallets.insert(wallet, lamports);
        }
        self.switches.insert(address, applied.switch.clone());

        Ok(TransactionResult {
            address,
            switch: applied.switch,
            transfer: applied.transfer,
        })
    }
}
