use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use cashio_instructions::CASH_DECIMALS;

/// A quantity of one token. The programs only ever see `amount`, the raw
/// integer in base units; `decimals` records the scale used to produce it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAmount {
    /// The token mint.
    pub mint: Pubkey,
    /// Decimal precision declared by the mint.
    pub decimals: u8,
    /// Quantity in base units.
    pub amount: u64,
}

impl TokenAmount {
    pub fn new(mint: Pubkey, decimals: u8, amount: u64) -> Self {
        Self {
            mint,
            decimals,
            amount,
        }
    }

    /// Scale a display value into base units: `round(value * 10^decimals)`.
    pub fn with_display(mint: Pubkey, decimals: u8, value: f64) -> Self {
        let amount = (value * 10f64.powi(decimals as i32)).round() as u64;

        Self {
            mint,
            decimals,
            amount,
        }
    }

    /// An amount of $CASH, which always has 6 decimals.
    pub fn cash(crate_mint: Pubkey, value: f64) -> Self {
        Self::with_display(crate_mint, CASH_DECIMALS, value)
    }

    /// The same raw quantity denominated in another mint of equal precision.
    /// Used when a staked-position token wraps an LP token one-to-one.
    pub fn as_mint(&self, mint: Pubkey) -> Self {
        Self { mint, ..*self }
    }
}
