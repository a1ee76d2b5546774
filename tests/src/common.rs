use anchor_lang::solana_program::program_pack::Pack;
use anchor_lang::{AccountDeserialize, InstructionData, ToAccountMetas};
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::token::spl_token;
use litesvm::types::{FailedTransactionMetadata, TransactionMetadata};
use litesvm::LiteSVM;
use solana_sdk::{
    instruction::Instruction, native_token::LAMPORTS_PER_SOL, pubkey::Pubkey,
    signature::Keypair, signer::Signer, system_program, sysvar, transaction::Transaction,
};
use staking_program::state::UserStake;
use std::path::PathBuf;

pub fn read_program() -> Vec<u8> {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../target/deploy/staking_program.so");
    std::fs::read(&path).unwrap_or_else(|_| panic!("Failed to read program from {:?}", path))
}

pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    svm.add_program(staking_program::ID, &read_program());
    svm
}

pub fn funded_keypair(svm: &mut LiteSVM) -> Keypair {
    let kp = Keypair::new();
    svm.airdrop(&kp.pubkey(), 10 * LAMPORTS_PER_SOL).unwrap();
    kp
}

// ---------------------------------------------------------------------------
// PDA and associated-token address derivation
// ---------------------------------------------------------------------------

pub fn token_mint_pda() -> Pubkey {
    Pubkey::find_program_address(&[b"token-mint"], &staking_program::ID).0
}

pub fn mint_authority_pda() -> Pubkey {
    Pubkey::find_program_address(&[b"mint-authority"], &staking_program::ID).0
}

pub fn staking_authority_pda() -> Pubkey {
    Pubkey::find_program_address(&[b"staking-authority"], &staking_program::ID).0
}

pub fn user_stake_pda(user: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[user.as_ref(), b"state_account"], &staking_program::ID).0
}

pub fn vault_address() -> Pubkey {
    get_associated_token_address(&staking_authority_pda(), &token_mint_pda())
}

pub fn user_token_address(user: &Pubkey) -> Pubkey {
    get_associated_token_address(user, &token_mint_pda())
}

// ---------------------------------------------------------------------------
// Instruction builders
// ---------------------------------------------------------------------------

pub fn initialize_mint_ix(payer: &Pubkey, decimals: u8) -> Instruction {
    let accounts = staking_program::accounts::InitializeMint {
        token_mint: token_mint_pda(),
        mint_authority: mint_authority_pda(),
        staking_authority: staking_authority_pda(),
        staking_token_account: vault_address(),
        payer: *payer,
        token_program: spl_token::ID,
        associated_token_program: anchor_spl::associated_token::ID,
        system_program: system_program::ID,
        rent: sysvar::rent::ID,
    };

    Instruction {
        program_id: staking_program::ID,
        accounts: accounts.to_account_metas(None),
        data: staking_program::instruction::InitializeMint { decimals }.data(),
    }
}

pub fn airdrop_ix(user: &Pubkey, amount: u64) -> Instruction {
    airdrop_ix_with_authority(user, amount, &mint_authority_pda())
}

/// Lets tests present an arbitrary account as the mint authority.
pub fn airdrop_ix_with_authority(user: &Pubkey, amount: u64, authority: &Pubkey) -> Instruction {
    let accounts = staking_program::accounts::Airdrop {
        token_mint: token_mint_pda(),
        mint_authority: *authority,
        user: *user,
        user_token_account: user_token_address(user),
        token_program: spl_token::ID,
        associated_token_program: anchor_spl::associated_token::ID,
        system_program: system_program::ID,
    };

    Instruction {
        program_id: staking_program::ID,
        accounts: accounts.to_account_metas(None),
        data: staking_program::instruction::Airdrop { amount }.data(),
    }
}

pub fn stake_ix(user: &Pubkey, amount: u64) -> Instruction {
    let accounts = staking_program::accounts::Stake {
        token_mint: token_mint_pda(),
        staking_authority: staking_authority_pda(),
        staking_token_account: vault_address(),
        user: *user,
        user_token_account: user_token_address(user),
        user_stake: user_stake_pda(user),
        token_program: spl_token::ID,
        associated_token_program: anchor_spl::associated_token::ID,
        system_program: system_program::ID,
    };

    Instruction {
        program_id: staking_program::ID,
        accounts: accounts.to_account_metas(None),
        data: staking_program::instruction::Stake { amount }.data(),
    }
}

pub fn unstake_ix(user: &Pubkey, amount: u64) -> Instruction {
    unstake_ix_with_record(user, amount, &user_stake_pda(user))
}

/// Lets tests present an arbitrary account as the stake record.
pub fn unstake_ix_with_record(user: &Pubkey, amount: u64, record: &Pubkey) -> Instruction {
    let accounts = staking_program::accounts::Unstake {
        token_mint: token_mint_pda(),
        staking_authority: staking_authority_pda(),
        staking_token_account: vault_address(),
        user: *user,
        user_token_account: user_token_address(user),
        user_stake: *record,
        token_program: spl_token::ID,
    };

    Instruction {
        program_id: staking_program::ID,
        accounts: accounts.to_account_metas(None),
        data: staking_program::instruction::Unstake { amount }.data(),
    }
}

pub fn send_ix(
    svm: &mut LiteSVM,
    signer: &Keypair,
    ix: Instruction,
) -> Result<TransactionMetadata, FailedTransactionMetadata> {
    let blockhash = svm.latest_blockhash();
    let tx =
        Transaction::new_signed_with_payer(&[ix], Some(&signer.pubkey()), &[signer], blockhash);
    svm.send_transaction(tx)
}

// ---------------------------------------------------------------------------
// State readers
// ---------------------------------------------------------------------------

pub fn token_balance(svm: &LiteSVM, address: &Pubkey) -> u64 {
    let account = svm
        .get_account(address)
        .unwrap_or_else(|| panic!("token account {} does not exist", address));
    spl_token::state::Account::unpack(&account.data)
        .expect("not a token account")
        .amount
}

pub fn mint_state(svm: &LiteSVM) -> spl_token::state::Mint {
    let account = svm.get_account(&token_mint_pda()).expect("mint does not exist");
    spl_token::state::Mint::unpack(&account.data).expect("not a mint account")
}

pub fn stake_record(svm: &LiteSVM, user: &Pubkey) -> Option<UserStake> {
    let account = svm.get_account(&user_stake_pda(user))?;
    if account.data.is_empty() {
        return None;
    }
    Some(UserStake::try_deserialize(&mut account.data.as_slice()).expect("bad stake record data"))
}

pub fn staked_amount(svm: &LiteSVM, user: &Pubkey) -> u64 {
    stake_record(svm, user).map(|record| record.amount).unwrap_or(0)
}
