//! Account layouts published by the bankman program.
//!
//! The layouts are fixed: an 8-byte Anchor discriminator followed by the
//! Borsh-encoded fields in declaration order. A buffer that is present but
//! does not match is a hard decode error, never a default value.

use std::io::Write;

use anchor_lang::error::ErrorCode;
use anchor_lang::prelude::*;

use crate::account_discriminator;

/// A single $CASH issuance vault, tied to one crate token.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Bank {
    /// The crate token holding the pooled collateral.
    pub crate_token: Pubkey,
    /// Bump seed of the bank address.
    pub bump: u8,

    /// Mint of the crate token.
    pub crate_mint: Pubkey,
    /// Account that can choose what collateral is allowed.
    pub curator: Pubkey,
    /// Account that can change who the curator is.
    pub bankman: Pubkey,
}

/// Authorization of one asset mint as acceptable backing for a [Bank].
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Collateral {
    /// The [Bank].
    pub bank: Pubkey,
    /// Mint of the collateral.
    pub mint: Pubkey,
    /// Bump seed of the collateral address.
    pub bump: u8,
    /// Hard cap on the number of collateral tokens that can be deposited.
    pub hard_cap: u64,
}

macro_rules! impl_account {
    ($Account:ident) => {
        impl anchor_lang::AccountSerialize for $Account {
            fn try_serialize<W: Write>(&self, writer: &mut W) -> anchor_lang::Result<()> {
                if writer
                    .write_all(&account_discriminator(stringify!($Account)))
                    .is_err()
                {
                    return Err(ErrorCode::AccountDidNotSerialize.into());
                }

                if AnchorSerialize::serialize(self, writer).is_err() {
                    return Err(ErrorCode::AccountDidNotSerialize.into());
                }

                Ok(())
            }
        }

        impl anchor_lang::AccountDeserialize for $Account {
            fn try_deserialize(buf: &mut &[u8]) -> anchor_lang::Result<Self> {
                if buf.len() < 8 {
                    return Err(ErrorCode::AccountDiscriminatorNotFound.into());
                }

                if buf[..8] != account_discriminator(stringify!($Account)) {
                    return Err(ErrorCode::AccountDiscriminatorMismatch.into());
                }

                Self::try_deserialize_unchecked(buf)
            }

            fn try_deserialize_unchecked(buf: &mut &[u8]) -> anchor_lang::Result<Self> {
                let mut data: &[u8] = &buf[8..];
                AnchorDeserialize::deserialize(&mut data)
                    .map_err(|_| ErrorCode::AccountDidNotDeserialize.into())
            }
        }
    };
}

impl_account!(Bank);
impl_account!(Collateral);
