

/// Longest seed accepted for a switch address (the PDA per-seed limit)
pub const MAX_SEED_LEN: usize = 32;

/// Byte offset of `owner` inside a serialized switch account (after the discriminator)
pub const OWNER_OFFSET: usize = 8;

/// Byte offset of `beneficiary` inside a serialized switch account
pub const BENEFICIARY_OFFSET: usize = OWNER_OFFSET + 32;

/// Seeds for PDA derivation
pub mod seeds {
    /// Switch entry PDA seed
    pub const SWITCH: &[u8] = b"switch";

    /// Program config PDA seed
    pub const PROGRAM_CONFIG: &[u8] = b"program_config";
}
