//! Instruction builders for the bankman program.
//!
//! Account ordering and mutability reproduce the program's declared
//! interface exactly; all addresses are expected to be fully resolved by the
//! caller (or derivable from the arguments).

use anchor_lang::prelude::borsh;
use anchor_lang::AnchorSerialize;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};
use spl_associated_token_account::get_associated_token_address;

use crate::{
    derive::{derive_bank, derive_collateral, derive_crate_token},
    instruction_data, BANKMAN_PROGRAM, BRRR_ISSUE_AUTHORITY, BURN_WITHDRAW_AUTHORITY,
    CRATE_TOKEN_PROGRAM,
};

#[derive(AnchorSerialize)]
struct NewBankArgs {
    bank_bump: u8,
    crate_bump: u8,
}

/// Provision a new bank for a crate mint. The crate token is created by the
/// program in the same call, so the mint must already be initialized with
/// the crate token as its authority and zero supply.
pub fn new_bank(crate_mint: &Pubkey, admin: &Pubkey, payer: &Pubkey) -> Instruction {
    let (crate_token, crate_bump) = derive_crate_token(crate_mint);
    let (bank, bank_bump) = derive_bank(&crate_token);

    let accounts = vec![
        AccountMeta::new(bank, false),
        AccountMeta::new_readonly(*crate_mint, false),
        AccountMeta::new(crate_token, false),
        AccountMeta::new_readonly(BRRR_ISSUE_AUTHORITY, false),
        AccountMeta::new_readonly(BURN_WITHDRAW_AUTHORITY, false),
        AccountMeta::new(*payer, true),
        AccountMeta::new_readonly(*admin, false),
        AccountMeta::new_readonly(system_program::ID, false),
        AccountMeta::new_readonly(CRATE_TOKEN_PROGRAM, false),
    ];

    Instruction {
        program_id: BANKMAN_PROGRAM,
        accounts,
        data: instruction_data(
            "new_bank",
            &NewBankArgs {
                bank_bump,
                crate_bump,
            },
        ),
    }
}

/// Authorize a collateral mint for a bank.
pub fn authorize_collateral(
    bank: &Pubkey,
    mint: &Pubkey,
    curator: &Pubkey,
    payer: &Pubkey,
) -> Instruction {
    let (collateral, bump) = derive_collateral(bank, mint);

    let accounts = vec![
        AccountMeta::new_readonly(*bank, false),
        AccountMeta::new(collateral, false),
        AccountMeta::new_readonly(*mint, false),
        AccountMeta::new_readonly(*curator, true),
        AccountMeta::new(*payer, true),
        AccountMeta::new_readonly(system_program::ID, false),
    ];

    Instruction {
        program_id: BANKMAN_PROGRAM,
        accounts,
        data: instruction_data("authorize_collateral", &bump),
    }
}

/// Set the hard cap on an authorized collateral.
pub fn set_collateral_hard_cap(
    bank: &Pubkey,
    mint: &Pubkey,
    hard_cap: u64,
    curator: &Pubkey,
) -> Instruction {
    let (collateral, _) = derive_collateral(bank, mint);

    let accounts = vec![
        AccountMeta::new_readonly(*bank, false),
        AccountMeta::new(collateral, false),
        AccountMeta::new_readonly(*curator, true),
    ];

    Instruction {
        program_id: BANKMAN_PROGRAM,
        accounts,
        data: instruction_data("set_collateral_hard_cap", &hard_cap),
    }
}

/// Set the bank's curator. Signed by the bankman authority.
pub fn set_curator(bank: &Pubkey, bankman: &Pubkey, next_curator: &Pubkey) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*bank, false),
        AccountMeta::new_readonly(*bankman, true),
        AccountMeta::new_readonly(*next_curator, false),
    ];

    Instruction {
        program_id: BANKMAN_PROGRAM,
        accounts,
        data: instruction_data("set_curator", &()),
    }
}

/// Hand the bankman authority to another account.
pub fn set_bankman(bank: &Pubkey, bankman: &Pubkey, next_bankman: &Pubkey) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*bank, false),
        AccountMeta::new_readonly(*bankman, true),
        AccountMeta::new_readonly(*next_bankman, false),
    ];

    Instruction {
        program_id: BANKMAN_PROGRAM,
        accounts,
        data: instruction_data("set_bankman", &()),
    }
}

/// Withdraw accrued author fees for a collateral to a destination token
/// account. The fees accumulate in the bank's associated token account for
/// the collateral mint.
pub fn withdraw_author_fee(
    bank: &Pubkey,
    collateral_mint: &Pubkey,
    amount: u64,
    bankman: &Pubkey,
    destination: &Pubkey,
) -> Instruction {
    let (collateral, _) = derive_collateral(bank, collateral_mint);
    let author_fees = get_associated_token_address(bank, collateral_mint);

    let accounts = vec![
        AccountMeta::new_readonly(*bank, false),
        AccountMeta::new_readonly(*bankman, true),
        AccountMeta::new_readonly(collateral, false),
        AccountMeta::new(author_fees, false),
        AccountMeta::new(*destination, false),
        AccountMeta::new_readonly(spl_token::ID, false),
    ];

    Instruction {
        program_id: BANKMAN_PROGRAM,
        accounts,
        data: instruction_data("withdraw_author_fee", &amount),
    }
}

#[cfg(test)]
mod tests {
    use crate::anchor_sighash;

    use super::*;

    #[test]
    fn new_bank_targets_bankman_with_derived_accounts() {
        let crate_mint = Pubkey::new_unique();
        let admin = Pubkey::new_unique();
        let payer = Pubkey::new_unique();

        let ix = new_bank(&crate_mint, &admin, &payer);
        let (crate_token, crate_bump) = derive_crate_token(&crate_mint);
        let (bank, bank_bump) = derive_bank(&crate_token);

        assert_eq!(BANKMAN_PROGRAM, ix.program_id);
        assert_eq!(9, ix.accounts.len());
        assert_eq!(bank, ix.accounts[0].pubkey);
        assert!(ix.accounts[0].is_writable);
        assert_eq!(crate_token, ix.accounts[2].pubkey);
        assert_eq!(payer, ix.accounts[5].pubkey);
        assert!(ix.accounts[5].is_signer);
        assert_eq!(&ix.data[..8], &anchor_sighash("new_bank"));
        assert_eq!(&ix.data[8..], &[bank_bump, crate_bump]);
    }

    #[test]
    fn authorize_collateral_requires_curator_and_payer_signatures() {
        let bank = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let curator = Pubkey::new_unique();
        let payer = Pubkey::new_unique();

        let ix = authorize_collateral(&bank, &mint, &curator, &payer);
        let (collateral, bump) = derive_collateral(&bank, &mint);

        assert_eq!(collateral, ix.accounts[1].pubkey);
        assert!(ix.accounts[1].is_writable);
        assert!(ix.accounts[3].is_signer);
        assert!(ix.accounts[4].is_signer);
        assert_eq!(&ix.data[8..], &[bump]);
    }

    #[test]
    fn set_collateral_hard_cap_encodes_raw_amount() {
        let bank = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let curator = Pubkey::new_unique();

        let ix = set_collateral_hard_cap(&bank, &mint, 1000, &curator);

        assert_eq!(3, ix.accounts.len());
        assert_eq!(&ix.data[..8], &anchor_sighash("set_collateral_hard_cap"));
        assert_eq!(&ix.data[8..], &1000u64.to_le_bytes());
    }

    #[test]
    fn withdraw_author_fee_pulls_from_bank_ata() {
        let bank = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let bankman = Pubkey::new_unique();
        let destination = Pubkey::new_unique();

        let ix = withdraw_author_fee(&bank, &mint, 42, &bankman, &destination);

        assert_eq!(
            get_associated_token_address(&bank, &mint),
            ix.accounts[3].pubkey
        );
        assert!(ix.accounts[3].is_writable);
        assert_eq!(destination, ix.accounts[4].pubkey);
        assert_eq!(spl_token::ID, ix.accounts[5].pubkey);
    }
}
