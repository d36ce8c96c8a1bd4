use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// Protocol configuration supplied by the application. The program ids and
/// protocol authorities are fixed constants in `cashio-instructions`; only
/// the values owned by collaborating protocols live here.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CashioConfig {
    /// Recipient of crate protocol fees, as published by the crate-token
    /// protocol. Protocol fee destinations in burn transactions are this
    /// account's ATAs.
    pub fee_owner: Pubkey,
}
