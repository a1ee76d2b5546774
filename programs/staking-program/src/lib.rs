pub mod account_structs;
/// # staking program - Custodial Token Staking
///
/// ## Business Process Flow
///
/// 1. Initial Setup:
///    - The program token mint is created at its derived address with a fixed
///      number of decimals
///    - Mint authority is a PDA, so only this program can issue tokens
///    - A shared vault token account, owned by the staking authority PDA, is
///      created to custody all staked tokens
///
/// 2. Token Issuance:
///    - Tokens are airdropped directly into a user's token account
///    - The mint authority PDA signs the issuance via its seeds
///
/// 3. User Staking Flow:
///    a. Stake:
///       - User transfers tokens from their own account into the vault
///       - A per-user stake record is created on first stake and tracks the
///         user's staked balance
///    b. Unstake:
///       - User withdraws up to their recorded staked balance
///       - The staking authority PDA signs the vault-side transfer
///       - The record persists at zero and is reused by later stakes
///
/// At every point between instructions the vault balance equals the sum of
/// all user stake records. Security is maintained through PDAs (Program
/// Derived Addresses) and strict token authority controls. All token
/// operations are atomic and validated through Solana's transaction model.
pub mod error;
pub mod events;
pub mod processor;
pub mod state;

use account_structs::*;
use anchor_lang::prelude::*;

declare_id!("7qftPj84GaECCoETGg9xxPc4D1HAbrN1wDb6D5WowNub");

#[program]
pub mod staking_program {
    use super::*;

    /// Creates the program token mint at its derived address and the shared
    /// staking vault owned by the staking authority PDA:
    /// - decimals: Decimal precision of the token, fixed at creation
    pub fn initialize_mint(ctx: Context<InitializeMint>, decimals: u8) -> Result<()> {
        processor::initialize_mint(ctx, decimals)
    }

    /// Mints new tokens directly into the user's token account, creating the
    /// account if it does not exist. Signed by the mint authority PDA.
    pub fn airdrop(ctx: Context<Airdrop>, amount: u64) -> Result<()> {
        processor::airdrop(ctx, amount)
    }

    /// Moves tokens from the user's account into the staking vault and
    /// credits the user's stake record:
    /// - Transfer is authorized by the user's own signature
    /// - Record is created lazily on first stake
    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        processor::stake(ctx, amount)
    }

    /// Returns tokens from the staking vault to the user's account and debits
    /// the user's stake record:
    /// - Vault-side transfer is signed by the staking authority PDA
    /// - Fails if the requested amount exceeds the recorded stake
    pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        processor::unstake(ctx, amount)
    }
}
