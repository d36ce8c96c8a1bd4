use std::error::Error as StdError;

use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;

use cashio_solana_client::transaction::TransactionBuilder;

pub type StakingResult<T> = Result<T, Box<dyn StdError + Send + Sync>>;

/// The staking protocol that wraps AMM LP tokens into the position tokens
/// used as collateral. Stake and unstake produce their own transactions,
/// independent of the print/burn transactions that follow them.
#[async_trait(?Send)]
pub trait StakingProvider {
    /// The address of the staked-position account for a position mint.
    fn position_address(&self, position_mint: &Pubkey) -> Pubkey;

    /// Stake LP tokens from the depositor's wallet, minting position tokens.
    async fn stake(
        &self,
        position_mint: &Pubkey,
        amount: u64,
        depositor: &Pubkey,
    ) -> StakingResult<TransactionBuilder>;

    /// Redeem position tokens back into the underlying LP tokens.
    async fn unstake(
        &self,
        position_mint: &Pubkey,
        amount: u64,
        owner: &Pubkey,
    ) -> StakingResult<TransactionBuilder>;
}
