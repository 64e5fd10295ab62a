//! End-to-end tests running the program natively under solana-program-test.

use anchor_lang::solana_program::account_info::AccountInfo;
use anchor_lang::solana_program::entrypoint::ProgramResult;
use anchor_lang::{AccountDeserialize, InstructionData, ToAccountMetas};
use dead_mans_switch::errors::SwitchError;
use dead_mans_switch::locator::derive_address;
use dead_mans_switch::state::{DeadManSwitch, ProgramConfig, SwitchStatus};
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::account::Account;
use solana_sdk::clock::Clock;
use solana_sdk::instruction::{Instruction, InstructionError};
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::system_program;
use solana_sdk::transaction::{Transaction, TransactionError};

const DAY: i64 = 86_400;

fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    // The generated entry wants one lifetime for the slice and its accounts.
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    dead_mans_switch::entry(program_id, accounts, data)
}

struct Harness {
    context: ProgramTestContext,
    owner: Keypair,
    beneficiary: Keypair,
}

async fn setup() -> Harness {
    let owner = Keypair::new();
    let beneficiary = Keypair::new();

    let mut program_test = ProgramTest::new(
        "dead_mans_switch",
        dead_mans_switch::ID,
        processor!(process_instruction),
    );
    for wallet in [&owner, &beneficiary] {
        program_test.add_account(
            wallet.pubkey(),
            Account::new(10 * LAMPORTS_PER_SOL, 0, &system_program::id()),
        );
    }

    let mut context = program_test.start_with_context().await;
    let authority = context.payer.pubkey();
    let payer = context.payer.insecure_clone();
    send(&mut context, initialize_config_ix(&authority), &payer)
        .await
        .unwrap();

    Harness {
        context,
        owner,
        beneficiary,
    }
}

async fn send(
    context: &mut ProgramTestContext,
    ix: Instruction,
    signer: &Keypair,
) -> Result<(), BanksClientError> {
    let blockhash = context.get_new_latest_blockhash().await.unwrap();
    let mut signers = vec![&context.payer];
    if signer.pubkey() != context.payer.pubkey() {
        signers.push(signer);
    }
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&context.payer.pubkey()),
        &signers,
        blockhash,
    );
    context.banks_client.process_transaction(tx).await
}

fn assert_switch_error(result: Result<(), BanksClientError>, expected: SwitchError) {
    let err = result.unwrap_err().unwrap();
    assert_eq!(
        err,
        TransactionError::InstructionError(0, InstructionError::Custom(expected.into()))
    );
}

async fn ledger_now(context: &mut ProgramTestContext) -> i64 {
    context
        .banks_client
        .get_sysvar::<Clock>()
        .await
        .unwrap()
        .unix_timestamp
}

async fn warp_to(context: &mut ProgramTestContext, unix_timestamp: i64) {
    let mut clock: Clock = context.banks_client.get_sysvar().await.unwrap();
    clock.unix_timestamp = unix_timestamp;
    context.set_sysvar(&clock);
}

async fn fetch_switch(context: &mut ProgramTestContext, address: Pubkey) -> DeadManSwitch {
    let account = context
        .banks_client
        .get_account(address)
        .await
        .unwrap()
        .unwrap();
    DeadManSwitch::try_deserialize(&mut account.data.as_slice()).unwrap()
}

async fn lamports(context: &mut ProgramTestContext, address: Pubkey) -> u64 {
    context
        .banks_client
        .get_balance(address)
        .await
        .unwrap()
}

fn config_address() -> Pubkey {
    Pubkey::find_program_address(&[ProgramConfig::SEED], &dead_mans_switch::ID).0
}

fn switch_address(owner: &Pubkey, seed: &str) -> Pubkey {
    derive_address(&dead_mans_switch::ID, owner, seed).unwrap().0
}

fn initialize_config_ix(authority: &Pubkey) -> Instruction {
    Instruction {
        program_id: dead_mans_switch::ID,
        accounts: dead_mans_switch::accounts::InitializeConfig {
            authority: *authority,
            program_config: config_address(),
            system_program: system_program::id(),
        }
        .to_account_metas(None),
        data: dead_mans_switch::instruction::InitializeConfig {}.data(),
    }
}

fn set_paused_ix(authority: &Pubkey, paused: bool) -> Instruction {
    Instruction {
        program_id: dead_mans_switch::ID,
        accounts: dead_mans_switch::accounts::SetPaused {
            authority: *authority,
            program_config: config_address(),
        }
        .to_account_metas(None),
        data: dead_mans_switch::instruction::SetPaused { paused }.data(),
    }
}

fn create_switch_ix(owner: &Pubkey, beneficiary: &Pubkey, deadline: i64, seed: &str) -> Instruction {
    create_switch_at_ix(owner, switch_address(owner, seed), beneficiary, deadline, seed)
}

fn create_switch_at_ix(
    owner: &Pubkey,
    switch: Pubkey,
    beneficiary: &Pubkey,
    deadline: i64,
    seed: &str,
) -> Instruction {
    Instruction {
        program_id: dead_mans_switch::ID,
        accounts: dead_mans_switch::accounts::CreateSwitch {
            owner: *owner,
            switch,
            program_config: config_address(),
            system_program: system_program::id(),
        }
        .to_account_metas(None),
        data: dead_mans_switch::instruction::CreateSwitch {
            beneficiary: *beneficiary,
            deadline,
            seed: seed.to_string(),
        }
        .data(),
    }
}

fn deposit_ix(owner: &Pubkey, switch: Pubkey, amount: u64) -> Instruction {
    Instruction {
        program_id: dead_mans_switch::ID,
        accounts: dead_mans_switch::accounts::Deposit {
            owner: *owner,
            switch,
            program_config: config_address(),
            system_program: system_program::id(),
        }
        .to_account_metas(None),
        data: dead_mans_switch::instruction::Deposit { amount }.data(),
    }
}

fn check_in_ix(signer: &Pubkey, switch: Pubkey, new_deadline: i64) -> Instruction {
    Instruction {
        program_id: dead_mans_switch::ID,
        accounts: dead_mans_switch::accounts::CheckIn {
            owner: *signer,
            switch,
        }
        .to_account_metas(None),
        data: dead_mans_switch::instruction::CheckIn { new_deadline }.data(),
    }
}

fn update_beneficiary_ix(owner: &Pubkey, switch: Pubkey, beneficiary: Pubkey) -> Instruction {
    Instruction {
        program_id: dead_mans_switch::ID,
        accounts: dead_mans_switch::accounts::UpdateBeneficiary {
            owner: *owner,
            switch,
        }
        .to_account_metas(None),
        data: dead_mans_switch::instruction::UpdateBeneficiary { beneficiary }.data(),
    }
}

fn cancel_ix(owner: &Pubkey, switch: Pubkey) -> Instruction {
    Instruction {
        program_id: dead_mans_switch::ID,
        accounts: dead_mans_switch::accounts::CancelSwitch {
            owner: *owner,
            switch,
        }
        .to_account_metas(None),
        data: dead_mans_switch::instruction::CancelSwitch {}.data(),
    }
}

fn claim_ix(beneficiary: &Pubkey, switch: Pubkey) -> Instruction {
    Instruction {
        program_id: dead_mans_switch::ID,
        accounts: dead_mans_switch::accounts::Claim {
            beneficiary: *beneficiary,
            switch,
        }
        .to_account_metas(None),
        data: dead_mans_switch::instruction::Claim {}.data(),
    }
}

#[tokio::test]
async fn test_fund_check_in_and_cancel() {
    let Harness {
        mut context,
        owner,
        beneficiary,
    } = setup().await;
    let now = ledger_now(&mut context).await;
    let switch = switch_address(&owner.pubkey(), "s1");

    send(
        &mut context,
        create_switch_ix(&owner.pubkey(), &beneficiary.pubkey(), now + DAY, "s1"),
        &owner,
    )
    .await
    .unwrap();
    send(
        &mut context,
        deposit_ix(&owner.pubkey(), switch, LAMPORTS_PER_SOL),
        &owner,
    )
    .await
    .unwrap();

    let funded = fetch_switch(&mut context, switch).await;
    assert_eq!(funded.owner, owner.pubkey());
    assert_eq!(funded.beneficiary, beneficiary.pubkey());
    assert_eq!(funded.balance, LAMPORTS_PER_SOL);
    assert_eq!(funded.status, SwitchStatus::Active);
    assert_eq!(funded.deadline, now + DAY);

    send(
        &mut context,
        check_in_ix(&owner.pubkey(), switch, now + 2 * DAY),
        &owner,
    )
    .await
    .unwrap();
    assert_eq!(fetch_switch(&mut context, switch).await.deadline, now + 2 * DAY);

    let owner_before = lamports(&mut context, owner.pubkey()).await;
    send(&mut context, cancel_ix(&owner.pubkey(), switch), &owner)
        .await
        .unwrap();

    let cancelled = fetch_switch(&mut context, switch).await;
    assert_eq!(cancelled.status, SwitchStatus::Cancelled);
    assert_eq!(cancelled.balance, 0);
    assert_eq!(
        lamports(&mut context, owner.pubkey()).await,
        owner_before + LAMPORTS_PER_SOL
    );

    let result = send(&mut context, claim_ix(&beneficiary.pubkey(), switch), &beneficiary).await;
    assert_switch_error(result, SwitchError::NotActive);
}

#[tokio::test]
async fn test_claim_after_deadline() {
    let Harness {
        mut context,
        owner,
        beneficiary,
    } = setup().await;
    let now = ledger_now(&mut context).await;
    let switch = switch_address(&owner.pubkey(), "s2");

    send(
        &mut context,
        create_switch_ix(&owner.pubkey(), &beneficiary.pubkey(), now + DAY, "s2"),
        &owner,
    )
    .await
    .unwrap();
    send(
        &mut context,
        deposit_ix(&owner.pubkey(), switch, LAMPORTS_PER_SOL),
        &owner,
    )
    .await
    .unwrap();

    let early = send(&mut context, claim_ix(&beneficiary.pubkey(), switch), &beneficiary).await;
    assert_switch_error(early, SwitchError::DeadlineNotReached);

    warp_to(&mut context, now + DAY + 10).await;
    let beneficiary_before = lamports(&mut context, beneficiary.pubkey()).await;
    send(&mut context, claim_ix(&beneficiary.pubkey(), switch), &beneficiary)
        .await
        .unwrap();

    let claimed = fetch_switch(&mut context, switch).await;
    assert_eq!(claimed.status, SwitchStatus::Claimed);
    assert_eq!(claimed.balance, 0);
    assert_eq!(
        lamports(&mut context, beneficiary.pubkey()).await,
        beneficiary_before + LAMPORTS_PER_SOL
    );

    let late = send(&mut context, cancel_ix(&owner.pubkey(), switch), &owner).await;
    assert_switch_error(late, SwitchError::NotActive);
}

#[tokio::test]
async fn test_create_rejections() {
    let Harness {
        mut context,
        owner,
        beneficiary,
    } = setup().await;
    let now = ledger_now(&mut context).await;

    let past = send(
        &mut context,
        create_switch_ix(&owner.pubkey(), &beneficiary.pubkey(), now - 1, "past"),
        &owner,
    )
    .await;
    assert_switch_error(past, SwitchError::InvalidDeadline);

    let to_self = send(
        &mut context,
        create_switch_ix(&owner.pubkey(), &owner.pubkey(), now + DAY, "self"),
        &owner,
    )
    .await;
    assert_switch_error(to_self, SwitchError::InvalidBeneficiary);

    send(
        &mut context,
        create_switch_ix(&owner.pubkey(), &beneficiary.pubkey(), now + DAY, "dup"),
        &owner,
    )
    .await
    .unwrap();
    let duplicate = send(
        &mut context,
        create_switch_ix(&owner.pubkey(), &beneficiary.pubkey(), now + 2 * DAY, "dup"),
        &owner,
    )
    .await;
    assert_switch_error(duplicate, SwitchError::AlreadyExists);
}

#[tokio::test]
async fn test_create_rejects_oversized_seed() {
    let Harness {
        mut context,
        owner,
        beneficiary,
    } = setup().await;
    let now = ledger_now(&mut context).await;
    let seed = "a".repeat(33);

    // no PDA exists for this seed, so any address stands in for the switch
    let result = send(
        &mut context,
        create_switch_at_ix(
            &owner.pubkey(),
            Pubkey::new_unique(),
            &beneficiary.pubkey(),
            now + DAY,
            &seed,
        ),
        &owner,
    )
    .await;
    assert_switch_error(result, SwitchError::InvalidSeed);
}

#[tokio::test]
async fn test_owner_only_transitions() {
    let Harness {
        mut context,
        owner,
        beneficiary,
    } = setup().await;
    let now = ledger_now(&mut context).await;
    let switch = switch_address(&owner.pubkey(), "guarded");

    send(
        &mut context,
        create_switch_ix(&owner.pubkey(), &beneficiary.pubkey(), now + DAY, "guarded"),
        &owner,
    )
    .await
    .unwrap();

    let hijack = send(
        &mut context,
        check_in_ix(&beneficiary.pubkey(), switch, now + 30 * DAY),
        &beneficiary,
    )
    .await;
    assert_switch_error(hijack, SwitchError::Unauthorized);

    let heir = Pubkey::new_unique();
    send(
        &mut context,
        update_beneficiary_ix(&owner.pubkey(), switch, heir),
        &owner,
    )
    .await
    .unwrap();
    assert_eq!(fetch_switch(&mut context, switch).await.beneficiary, heir);
}

#[tokio::test]
async fn test_pause_blocks_intake_but_not_exits() {
    let Harness {
        mut context,
        owner,
        beneficiary,
    } = setup().await;
    let now = ledger_now(&mut context).await;
    let switch = switch_address(&owner.pubkey(), "before-pause");
    let authority = context.payer.insecure_clone();

    send(
        &mut context,
        create_switch_ix(&owner.pubkey(), &beneficiary.pubkey(), now + DAY, "before-pause"),
        &owner,
    )
    .await
    .unwrap();
    send(
        &mut context,
        deposit_ix(&owner.pubkey(), switch, LAMPORTS_PER_SOL),
        &owner,
    )
    .await
    .unwrap();

    let not_admin = send(&mut context, set_paused_ix(&owner.pubkey(), true), &owner).await;
    assert_switch_error(not_admin, SwitchError::Unauthorized);

    send(
        &mut context,
        set_paused_ix(&authority.pubkey(), true),
        &authority,
    )
    .await
    .unwrap();

    let create = send(
        &mut context,
        create_switch_ix(&owner.pubkey(), &beneficiary.pubkey(), now + DAY, "after-pause"),
        &owner,
    )
    .await;
    assert_switch_error(create, SwitchError::ProgramPaused);

    let deposit = send(&mut context, deposit_ix(&owner.pubkey(), switch, 1), &owner).await;
    assert_switch_error(deposit, SwitchError::ProgramPaused);

    send(&mut context, cancel_ix(&owner.pubkey(), switch), &owner)
        .await
        .unwrap();
    assert_eq!(
        fetch_switch(&mut context, switch).await.status,
        SwitchStatus::Cancelled
    );
}
