use anchor_lang::prelude::*;

#[event]
pub struct MintInitialized {
    pub mint: Pubkey,
    pub decimals: u8,
    pub vault: Pubkey,
}

#[event]
pub struct TokensAirdropped {
    pub user: Pubkey,
    pub amount: u64,
    pub mint: Pubkey,
}

#[event]
pub struct TokensStaked {
    pub user: Pubkey,
    pub amount: u64,
    pub total_staked: u64,
    pub vault: Pubkey,
}

#[event]
pub struct TokensUnstaked {
    pub user: Pubkey,
    pub amount: u64,
    pub total_staked: u64,
    pub vault: Pubkey,
}
