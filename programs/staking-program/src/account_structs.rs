use crate::error::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[derive(Accounts)]
#[instruction(decimals: u8)]
pub struct InitializeMint<'info> {
    /// The program token mint, created at its derived address. Creation fails
    /// at the account layer if the mint PDA already holds an account.
    #[account(
        init,
        payer = payer,
        seeds = [TOKEN_MINT_SEED],
        bump,
        mint::decimals = decimals,
        mint::authority = mint_authority
    )]
    pub token_mint: Account<'info, Mint>,

    /// CHECK: PDA with no private key that acts as the mint authority,
    /// validated by the seeds constraint. Only this program can produce its
    /// signature, via seeds, so issuance stays under program control.
    #[account(
        seeds = [MINT_AUTHORITY_SEED],
        bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    /// CHECK: PDA that owns the staking vault, validated by seeds constraint
    #[account(
        seeds = [STAKING_AUTHORITY_SEED],
        bump
    )]
    pub staking_authority: UncheckedAccount<'info>,

    /// The shared custodial vault holding all staked tokens. Owned by the
    /// staking authority PDA so only this program can move tokens out.
    #[account(
        init,
        payer = payer,
        associated_token::mint = token_mint,
        associated_token::authority = staking_authority
    )]
    pub staking_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
pub struct Airdrop<'info> {
    #[account(
        mut,
        seeds = [TOKEN_MINT_SEED],
        bump
    )]
    pub token_mint: Account<'info, Mint>,

    /// CHECK: PDA mint authority, validated by seeds constraint and matched
    /// against the authority recorded on the mint itself
    #[account(
        seeds = [MINT_AUTHORITY_SEED],
        bump,
        constraint = mint_authority.key() == token_mint.mint_authority.unwrap() @ StakingError::Unauthorized
    )]
    pub mint_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = token_mint,
        associated_token::authority = user
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Stake<'info> {
    #[account(
        seeds = [TOKEN_MINT_SEED],
        bump
    )]
    pub token_mint: Account<'info, Mint>,

    /// CHECK: PDA vault owner, validated by seeds constraint
    #[account(
        seeds = [STAKING_AUTHORITY_SEED],
        bump
    )]
    pub staking_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = staking_authority
    )]
    pub staking_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = user
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Per-user stake record, created on first stake and reused afterwards.
    #[account(
        init_if_needed,
        payer = user,
        space = UserStake::LEN,
        seeds = [user.key().as_ref(), USER_STAKE_SEED],
        bump
    )]
    pub user_stake: Account<'info, UserStake>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Unstake<'info> {
    #[account(
        seeds = [TOKEN_MINT_SEED],
        bump
    )]
    pub token_mint: Account<'info, Mint>,

    /// CHECK: PDA vault owner, validated by seeds and the vault's recorded owner
    #[account(
        seeds = [STAKING_AUTHORITY_SEED],
        bump,
        constraint = staking_authority.key() == staking_token_account.owner @ StakingError::Unauthorized
    )]
    pub staking_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = staking_authority
    )]
    pub staking_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = user
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [user.key().as_ref(), USER_STAKE_SEED],
        bump = user_stake.bump,
        constraint = user_stake.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_stake: Account<'info, UserStake>,

    pub token_program: Program<'info, Token>,
}
