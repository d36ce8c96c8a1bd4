//! Instruction builders for the brrr program (printing and burning $CASH).

use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use crate::{instruction_data, BRRR_PROGRAM, BRRR_ISSUE_AUTHORITY, BURN_WITHDRAW_AUTHORITY, CRATE_TOKEN_PROGRAM};

/// Accounts describing the AMM pool backing a collateral position. The four
/// pool addresses are read off the caller-supplied pool state; the arrow is
/// the staking position wrapping the pool's LP token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaberSwapAccounts {
    /// The staked position used as collateral.
    pub arrow: Pubkey,
    /// The pool's swap state account.
    pub saber_swap: Pubkey,
    /// Mint of the pool's LP token.
    pub pool_mint: Pubkey,
    /// Reserve of token A.
    pub reserve_a: Pubkey,
    /// Reserve of token B.
    pub reserve_b: Pubkey,
}

/// The accounts shared between print and burn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrrrCommon {
    /// The bank.
    pub bank: Pubkey,
    /// The collateral record for the deposited/withdrawn mint.
    pub collateral: Pubkey,
    /// The crate token of the bank.
    pub crate_token: Pubkey,
    /// Mint of the crate token.
    pub crate_mint: Pubkey,
    /// The crate's token account holding the collateral.
    pub crate_collateral_tokens: Pubkey,
    /// The backing pool.
    pub swap: SaberSwapAccounts,
}

impl BrrrCommon {
    /// Flatten into the account order the program declares: the five fixed
    /// accounts, the nested swap accounts, then the two program ids.
    fn to_account_metas(self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new_readonly(self.bank, false),
            AccountMeta::new_readonly(self.collateral, false),
            AccountMeta::new_readonly(self.crate_token, false),
            AccountMeta::new(self.crate_mint, false),
            AccountMeta::new(self.crate_collateral_tokens, false),
            AccountMeta::new_readonly(self.swap.arrow, false),
            AccountMeta::new_readonly(self.swap.saber_swap, false),
            AccountMeta::new_readonly(self.swap.pool_mint, false),
            AccountMeta::new_readonly(self.swap.reserve_a, false),
            AccountMeta::new_readonly(self.swap.reserve_b, false),
            AccountMeta::new_readonly(spl_token::ID, false),
            AccountMeta::new_readonly(CRATE_TOKEN_PROGRAM, false),
        ]
    }
}

/// Print $CASH by depositing collateral tokens. Amount is in the raw units
/// of the collateral mint.
pub fn print_cash(
    common: BrrrCommon,
    depositor: &Pubkey,
    depositor_source: &Pubkey,
    mint_destination: &Pubkey,
    deposit_amount: u64,
) -> Instruction {
    let mut accounts = common.to_account_metas();
    accounts.extend([
        AccountMeta::new(*depositor, true),
        AccountMeta::new(*depositor_source, false),
        AccountMeta::new(*mint_destination, false),
        AccountMeta::new_readonly(BRRR_ISSUE_AUTHORITY, false),
    ]);

    Instruction {
        program_id: BRRR_PROGRAM,
        accounts,
        data: instruction_data("print_cash", &deposit_amount),
    }
}

/// Burn $CASH, redeeming collateral to the four destination legs: the burned
/// token source, the withdrawal destination, and the author/protocol fee
/// destinations. Amount is in raw $CASH units.
#[allow(clippy::too_many_arguments)]
pub fn burn_cash(
    common: BrrrCommon,
    burner: &Pubkey,
    burned_cash_source: &Pubkey,
    withdraw_destination: &Pubkey,
    author_fee_destination: &Pubkey,
    protocol_fee_destination: &Pubkey,
    burn_amount: u64,
) -> Instruction {
    let mut accounts = common.to_account_metas();
    accounts.extend([
        AccountMeta::new(*burner, true),
        AccountMeta::new(*burned_cash_source, false),
        AccountMeta::new(*withdraw_destination, false),
        AccountMeta::new(*author_fee_destination, false),
        AccountMeta::new(*protocol_fee_destination, false),
        AccountMeta::new_readonly(BURN_WITHDRAW_AUTHORITY, false),
    ]);

    Instruction {
        program_id: BRRR_PROGRAM,
        accounts,
        data: instruction_data("burn_cash", &burn_amount),
    }
}

#[cfg(test)]
mod tests {
    use crate::anchor_sighash;

    use super::*;

    fn sample_common() -> BrrrCommon {
        BrrrCommon {
            bank: Pubkey::new_unique(),
            collateral: Pubkey::new_unique(),
            crate_token: Pubkey::new_unique(),
            crate_mint: Pubkey::new_unique(),
            crate_collateral_tokens: Pubkey::new_unique(),
            swap: SaberSwapAccounts {
                arrow: Pubkey::new_unique(),
                saber_swap: Pubkey::new_unique(),
                pool_mint: Pubkey::new_unique(),
                reserve_a: Pubkey::new_unique(),
                reserve_b: Pubkey::new_unique(),
            },
        }
    }

    #[test]
    fn print_cash_account_order() {
        let common = sample_common();
        let depositor = Pubkey::new_unique();
        let source = Pubkey::new_unique();
        let destination = Pubkey::new_unique();

        let ix = print_cash(common, &depositor, &source, &destination, 5_000_000);

        assert_eq!(BRRR_PROGRAM, ix.program_id);
        assert_eq!(16, ix.accounts.len());
        assert_eq!(common.bank, ix.accounts[0].pubkey);
        assert_eq!(common.swap.arrow, ix.accounts[5].pubkey);
        assert_eq!(common.swap.reserve_b, ix.accounts[9].pubkey);
        assert_eq!(CRATE_TOKEN_PROGRAM, ix.accounts[11].pubkey);
        assert_eq!(depositor, ix.accounts[12].pubkey);
        assert!(ix.accounts[12].is_signer);
        assert_eq!(BRRR_ISSUE_AUTHORITY, ix.accounts[15].pubkey);
        assert_eq!(&ix.data[..8], &anchor_sighash("print_cash"));
        assert_eq!(&ix.data[8..], &5_000_000u64.to_le_bytes());
    }

    #[test]
    fn burn_cash_has_four_destination_legs() {
        let common = sample_common();
        let burner = Pubkey::new_unique();
        let legs: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();

        let ix = burn_cash(
            common, &burner, &legs[0], &legs[1], &legs[2], &legs[3], 1_000_000,
        );

        assert_eq!(18, ix.accounts.len());
        assert_eq!(burner, ix.accounts[12].pubkey);
        for (offset, leg) in legs.iter().enumerate() {
            assert_eq!(*leg, ix.accounts[13 + offset].pubkey);
            assert!(ix.accounts[13 + offset].is_writable);
        }
        assert_eq!(BURN_WITHDRAW_AUTHORITY, ix.accounts[17].pubkey);
        assert_eq!(&ix.data[..8], &anchor_sighash("burn_cash"));
    }

    #[test]
    fn crate_accounts_are_writable_in_common_set() {
        let common = sample_common();
        let metas = common.to_account_metas();

        assert!(metas[3].is_writable);
        assert!(metas[4].is_writable);
        assert!(!metas[0].is_writable);
        assert!(!metas[5].is_writable);
    }
}
