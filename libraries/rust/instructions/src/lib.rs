//! Instruction builders and address derivation for the Cashio on-chain
//! programs.
//!
//! The programs themselves are already deployed; this crate only reproduces
//! their published interfaces (account layouts, account ordering and
//! argument encoding) so that clients can construct valid instructions.

pub mod bankman;
pub mod brrr;
pub mod derive;
pub mod seeds;
pub mod state;
pub mod token;

use anchor_lang::AnchorSerialize;
use solana_sdk::{pubkey, pubkey::Pubkey};

/// The bankman program, managing [state::Bank] and [state::Collateral]
/// records.
pub const BANKMAN_PROGRAM: Pubkey = pubkey!("BANKhiCgEYd7QmcWwPLkqvTuuLN6qEwXDZgTe6HEbwv1");

/// The brrr program, printing and burning $CASH.
pub const BRRR_PROGRAM: Pubkey = pubkey!("BRRRot6ig147TBU6EGp7TMesmQrwu729CbG6qu2ZUHWm");

/// The crate-token program holding the pooled collateral.
pub const CRATE_TOKEN_PROGRAM: Pubkey = pubkey!("CRATwLpq6YasTCEgPtBkEXWqnTnHMPGFgrZDHcAUKEbC");

/// Authority allowed to issue new crate tokens, owned by the brrr program.
pub const BRRR_ISSUE_AUTHORITY: Pubkey = pubkey!("BJ9L3jNu6tvrUxPHTMfwyA8Lgw2X6ky5bVNyDqiXSxgA");

/// Authority allowed to withdraw crate collateral, owned by the brrr program.
pub const BURN_WITHDRAW_AUTHORITY: Pubkey = pubkey!("7Twx9JYz3gB4rF3h2cyUMnQWj9QEtmwviTvVD7xjAGEw");

/// Number of decimals of $CASH. Fixed by the deployed programs; every raw
/// amount crossing the program boundary is scaled by this.
pub const CASH_DECIMALS: u8 = 6;

/// The 8-byte discriminator prefixing the arguments of an Anchor program
/// instruction: `sha256("global:<name>")[..8]`.
pub fn anchor_sighash(name: &str) -> [u8; 8] {
    let hash = solana_sdk::hash::hash(format!("global:{name}").as_bytes());
    let mut sighash = [0u8; 8];
    sighash.copy_from_slice(&hash.to_bytes()[..8]);
    sighash
}

/// The 8-byte discriminator prefixing an Anchor account of the named type:
/// `sha256("account:<name>")[..8]`.
pub fn account_discriminator(name: &str) -> [u8; 8] {
    let hash = solana_sdk::hash::hash(format!("account:{name}").as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash.to_bytes()[..8]);
    discriminator
}

/// Serialized instruction data for an Anchor program call: the method
/// sighash followed by the Borsh-encoded arguments.
pub(crate) fn instruction_data(name: &str, args: &impl AnchorSerialize) -> Vec<u8> {
    let mut data = anchor_sighash(name).to_vec();
    args.serialize(&mut data)
        .expect("writing to a Vec cannot fail");
    data
}
