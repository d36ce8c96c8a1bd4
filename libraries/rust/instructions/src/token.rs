//! SPL token setup instructions needed before registering a bank.

use solana_sdk::{
    program_error::ProgramError, program_pack::Pack, pubkey::Pubkey, rent::Rent,
    system_instruction,
};
use spl_token::state::Mint;

/// Instructions to create and initialize a new token mint. The mint account
/// must sign the transaction containing these.
///
/// TODO: read the rent cost from the network instead of assuming the default
/// rent schedule.
pub fn create_mint(
    payer: &Pubkey,
    mint: &Pubkey,
    authority: &Pubkey,
    freeze_authority: Option<&Pubkey>,
    decimals: u8,
) -> Result<Vec<solana_sdk::instruction::Instruction>, ProgramError> {
    let rent = Rent::default();

    let create_account = system_instruction::create_account(
        payer,
        mint,
        rent.minimum_balance(Mint::LEN),
        Mint::LEN as u64,
        &spl_token::ID,
    );
    let initialize = spl_token::instruction::initialize_mint(
        &spl_token::ID,
        mint,
        authority,
        freeze_authority,
        decimals,
    )?;

    Ok(vec![create_account, initialize])
}
