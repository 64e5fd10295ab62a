use anchor_lang::prelude::*;

#[error_code]
pub enum SwitchError {
    #[msg("A switch already exists at this address")]
    AlreadyExists,

    #[msg("The switch is not active")]
    NotActive,

    #[msg("You are not authorized to perform this action")]
    Unauthorized,

    #[msg("Deadline must be strictly in the future")]
    InvalidDeadline,

    #[msg("Invalid beneficiary address")]
    InvalidBeneficiary,

    #[msg("Invalid amount")]
    InvalidAmount,

    #[msg("The deadline has not been reached yet")]
    DeadlineNotReached,

    #[msg("No switch found at this address")]
    NotFound,

    #[msg("Seed is longer than 32 bytes")]
    InvalidSeed,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Insufficient funds")]
    InsufficientFunds,

    #[msg("Program is paused")]
    ProgramPaused,
}
