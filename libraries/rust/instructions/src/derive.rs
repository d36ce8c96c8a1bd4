//! PDA derivation functions for the bankman program and its collaborators

use solana_sdk::pubkey::Pubkey;

use crate::{seeds, BANKMAN_PROGRAM, CRATE_TOKEN_PROGRAM};

/// Derive the canonical [crate::state::Bank] address for a crate token.
pub fn derive_bank(crate_token: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[seeds::BANK, crate_token.as_ref()], &BANKMAN_PROGRAM)
}

/// Derive the canonical [crate::state::Collateral] address for a
/// (bank, collateral mint) pair.
pub fn derive_collateral(bank: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[seeds::COLLATERAL, bank.as_ref(), mint.as_ref()],
        &BANKMAN_PROGRAM,
    )
}

/// Derive the crate token address for a mint, under the crate-token program.
pub fn derive_crate_token(crate_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[seeds::CRATE_TOKEN, crate_mint.as_ref()],
        &CRATE_TOKEN_PROGRAM,
    )
}

/// Derive the staked-position (arrow) address for a position mint. The arrow
/// program id is supplied by the staking collaborator.
pub fn derive_arrow(arrow_mint: &Pubkey, arrow_program: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[seeds::ARROW, arrow_mint.as_ref()], arrow_program)
}
