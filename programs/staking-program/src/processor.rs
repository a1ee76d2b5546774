use crate::account_structs::*;
use crate::error::*;
use crate::events::*;
use crate::state::{MINT_AUTHORITY_SEED, STAKING_AUTHORITY_SEED};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, MintTo, Transfer};

pub fn initialize_mint(ctx: Context<InitializeMint>, decimals: u8) -> Result<()> {
    // The mint and vault accounts are created by the context constraints; the
    // vault starts empty and the mint authority is fixed to the PDA forever.
    msg!(
        "Mint {} initialized with {} decimals, vault {}",
        ctx.accounts.token_mint.key(),
        decimals,
        ctx.accounts.staking_token_account.key()
    );

    emit!(MintInitialized {
        mint: ctx.accounts.token_mint.key(),
        decimals,
        vault: ctx.accounts.staking_token_account.key(),
    });

    Ok(())
}

pub fn airdrop(ctx: Context<Airdrop>, amount: u64) -> Result<()> {
    require!(amount > 0, StakingError::InvalidAmount);
    require!(
        ctx.accounts.token_mint.supply.checked_add(amount).is_some(),
        StakingError::Overflow
    );

    let seeds: &[&[u8]] = &[MINT_AUTHORITY_SEED, &[ctx.bumps.mint_authority]];
    let signer = &[&seeds[..]];
    let cpi_accounts = MintTo {
        mint: ctx.accounts.token_mint.to_account_info(),
        to: ctx.accounts.user_token_account.to_account_info(),
        authority: ctx.accounts.mint_authority.to_account_info(),
    };
    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            signer,
        ),
        amount,
    )?;

    emit!(TokensAirdropped {
        user: ctx.accounts.user.key(),
        amount,
        mint: ctx.accounts.token_mint.key(),
    });

    Ok(())
}

pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
    require!(amount > 0, StakingError::InvalidAmount);
    require!(
        ctx.accounts.user_token_account.amount >= amount,
        StakingError::InsufficientFunds
    );

    // The user spends their own funds, so their signature authorizes the
    // transfer into the vault. No program authority is involved on this leg.
    let cpi_accounts = Transfer {
        from: ctx.accounts.user_token_account.to_account_info(),
        to: ctx.accounts.staking_token_account.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
    };
    token::transfer(
        CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts),
        amount,
    )?;

    let user_stake = &mut ctx.accounts.user_stake;
    if user_stake.owner == Pubkey::default() {
        user_stake.owner = ctx.accounts.user.key();
        user_stake.bump = ctx.bumps.user_stake;
    }
    user_stake.amount = user_stake
        .amount
        .checked_add(amount)
        .ok_or(StakingError::Overflow)?;

    emit!(TokensStaked {
        user: ctx.accounts.user.key(),
        amount,
        total_staked: user_stake.amount,
        vault: ctx.accounts.staking_token_account.key(),
    });

    Ok(())
}

pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
    require!(amount > 0, StakingError::InvalidAmount);
    require!(
        ctx.accounts.user_stake.amount >= amount,
        StakingError::InsufficientStake
    );

    // The vault is program-controlled: the staking authority PDA signs the
    // outbound transfer via its seeds.
    let seeds: &[&[u8]] = &[STAKING_AUTHORITY_SEED, &[ctx.bumps.staking_authority]];
    let signer = &[&seeds[..]];
    let cpi_accounts = Transfer {
        from: ctx.accounts.staking_token_account.to_account_info(),
        to: ctx.accounts.user_token_account.to_account_info(),
        authority: ctx.accounts.staking_authority.to_account_info(),
    };
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            signer,
        ),
        amount,
    )?;

    let user_stake = &mut ctx.accounts.user_stake;
    user_stake.amount = user_stake
        .amount
        .checked_sub(amount)
        .ok_or(StakingError::InsufficientStake)?;

    emit!(TokensUnstaked {
        user: ctx.accounts.user.key(),
        amount,
        total_staked: user_stake.amount,
        vault: ctx.accounts.staking_token_account.key(),
    });

    Ok(())
}
