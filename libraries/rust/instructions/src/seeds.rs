//! Literal seed strings for every PDA kind this client derives.
//!
//! Each record kind carries its own literal, which is what keeps derived
//! addresses from colliding across kinds.

pub const BANK: &[u8] = b"Bank";

pub const COLLATERAL: &[u8] = b"Collateral";

/// Seed used by the crate-token program for the pooled-token account.
pub const CRATE_TOKEN: &[u8] = b"CrateToken";

/// Seed used by the arrow staking program for a staked-position account.
pub const ARROW: &[u8] = b"arrow";
