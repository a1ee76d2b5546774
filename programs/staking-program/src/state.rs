use anchor_lang::prelude::*;

/// Seed for the program's token mint PDA.
pub const TOKEN_MINT_SEED: &[u8] = b"token-mint";
/// Seed for the PDA holding mint authority over the program token.
pub const MINT_AUTHORITY_SEED: &[u8] = b"mint-authority";
/// Seed for the PDA that owns the shared staking vault.
pub const STAKING_AUTHORITY_SEED: &[u8] = b"staking-authority";
/// Seed suffix for per-user stake records (prefixed by the user key).
pub const USER_STAKE_SEED: &[u8] = b"state_account";

#[account]
pub struct UserStake {
    pub owner: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl UserStake {
    pub const LEN: usize = 8 + 32 + 8 + 1;
}
