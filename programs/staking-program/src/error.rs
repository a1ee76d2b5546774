use anchor_lang::prelude::*;

#[error_code]
pub enum StakingError {
    #[msg("Invalid amount")]
    InvalidAmount = 1,
    #[msg("Mint already initialized")]
    AlreadyInitialized = 2,
    #[msg("Authority does not match the derived program authority")]
    Unauthorized = 3,
    #[msg("Insufficient token balance to stake")]
    InsufficientFunds = 4,
    #[msg("Insufficient staked balance to unstake")]
    InsufficientStake = 5,
    #[msg("Amount arithmetic overflowed")]
    Overflow = 6,
}
