use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address;

use cashio_instructions::{
    brrr::{BrrrCommon, SaberSwapAccounts},
    derive::derive_collateral,
    state::Bank,
};

/// Addresses of the AMM pool backing a collateral position, read off the
/// pool's published state by the caller. They are passed through to the
/// program as-is; the program performs its own validation against the pool
/// state.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapPool {
    /// The pool's swap state account.
    pub swap: Pubkey,
    /// Mint of the pool's LP token.
    pub pool_mint: Pubkey,
    /// Reserve of token A.
    pub reserve_a: Pubkey,
    /// Reserve of token B.
    pub reserve_b: Pubkey,
}

/// Resolve the accounts shared by print and burn for one collateral
/// position: the collateral record, the crate's holding account for the
/// position mint, the crate token and mint off the bank record, and the
/// pool addresses off the supplied state.
pub(crate) fn common_accounts(
    bank_address: &Pubkey,
    bank: &Bank,
    pool: &SwapPool,
    position_mint: &Pubkey,
    position_address: Pubkey,
) -> BrrrCommon {
    let (collateral, _) = derive_collateral(bank_address, position_mint);
    let crate_collateral_tokens = get_associated_token_address(&bank.crate_token, position_mint);

    BrrrCommon {
        bank: *bank_address,
        collateral,
        crate_token: bank.crate_token,
        crate_mint: bank.crate_mint,
        crate_collateral_tokens,
        swap: SaberSwapAccounts {
            arrow: position_address,
            saber_swap: pool.swap,
            pool_mint: pool.pool_mint,
            reserve_a: pool.reserve_a,
            reserve_b: pool.reserve_b,
        },
    }
}
