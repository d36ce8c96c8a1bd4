use std::sync::Arc;

use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address;

use cashio_instructions::brrr;
use cashio_solana_client::{transaction::TransactionBuilder, NetworkUserInterface};

use crate::client::{ClientError, ClientResult, ClientState};
use crate::staking::StakingProvider;
use crate::swaps::{common_accounts, SwapPool};
use crate::tokens::TokenAmount;

/// Client for the brrr program: printing and burning $CASH against staked
/// collateral positions.
#[derive(Clone)]
pub struct BrrrClient<I, S> {
    client: Arc<ClientState<I>>,
    staking: Arc<S>,
}

/// The two independent transactions produced when printing from LP tokens:
/// the stake into the position, then the print against it. They are
/// submitted separately, in order.
pub struct StakeAndPrint {
    pub stake: TransactionBuilder,
    pub print: TransactionBuilder,
}

impl<I: NetworkUserInterface, S: StakingProvider> BrrrClient<I, S> {
    pub(crate) fn new(inner: Arc<ClientState<I>>, staking: Arc<S>) -> Self {
        Self {
            client: inner,
            staking,
        }
    }

    /// Build the transaction printing $CASH from already-staked position
    /// tokens held by the depositor.
    pub async fn print_cash(
        &self,
        bank: &Pubkey,
        collateral_amount: TokenAmount,
        pool: &SwapPool,
        depositor: Option<Pubkey>,
    ) -> ClientResult<I, TransactionBuilder> {
        let depositor = depositor.unwrap_or_else(|| self.client.signer());

        let bank_state = self.client.get_bank(bank).await?;

        let mut instructions = vec![];

        // the depositor's collateral account is assumed to exist already;
        // staking into the position is what creates it
        let depositor_source = get_associated_token_address(&depositor, &collateral_amount.mint);
        let mint_destination = self
            .client
            .with_token_account(&depositor, &bank_state.crate_mint, &mut instructions)
            .await?;

        let common = common_accounts(
            bank,
            &bank_state,
            pool,
            &collateral_amount.mint,
            self.staking.position_address(&collateral_amount.mint),
        );

        instructions.push(brrr::print_cash(
            common,
            &depositor,
            &depositor_source,
            &mint_destination,
            collateral_amount.amount,
        ));

        Ok(instructions.into())
    }

    /// Build the transaction burning $CASH, redeeming position tokens of the
    /// given mint. The author fee leg goes to the bank's holding account and
    /// the protocol fee leg to the fee owner's.
    pub async fn burn_cash(
        &self,
        bank: &Pubkey,
        cash_amount: TokenAmount,
        pool: &SwapPool,
        position_mint: &Pubkey,
        burner: Option<Pubkey>,
    ) -> ClientResult<I, TransactionBuilder> {
        let burner = burner.unwrap_or_else(|| self.client.signer());

        let bank_state = self.client.get_bank(bank).await?;

        let mut instructions = vec![];
        let burned_cash_source = self
            .client
            .with_token_account(&burner, &bank_state.crate_mint, &mut instructions)
            .await?;
        let withdraw_destination = self
            .client
            .with_token_account(&burner, position_mint, &mut instructions)
            .await?;

        let author_fee_destination = get_associated_token_address(bank, position_mint);
        let protocol_fee_destination =
            get_associated_token_address(&self.client.config.fee_owner, position_mint);

        let common = common_accounts(
            bank,
            &bank_state,
            pool,
            position_mint,
            self.staking.position_address(position_mint),
        );

        instructions.push(brrr::burn_cash(
            common,
            &burner,
            &burned_cash_source,
            &withdraw_destination,
            &author_fee_destination,
            &protocol_fee_destination,
            cash_amount.amount,
        ));

        Ok(instructions.into())
    }

    /// Stake LP tokens into a position and print $CASH from the result. The
    /// two transactions are independent and returned separately.
    pub async fn print_cash_from_lp(
        &self,
        bank: &Pubkey,
        position_mint: &Pubkey,
        lp_amount: TokenAmount,
        pool: &SwapPool,
        depositor: Option<Pubkey>,
    ) -> ClientResult<I, StakeAndPrint> {
        let depositor = depositor.unwrap_or_else(|| self.client.signer());

        let stake = self
            .staking
            .stake(position_mint, lp_amount.amount, &depositor)
            .await
            .map_err(ClientError::Staking)?;

        let print = self
            .print_cash(
                bank,
                lp_amount.as_mint(*position_mint),
                pool,
                Some(depositor),
            )
            .await?;

        Ok(StakeAndPrint { stake, print })
    }

    /// Redeem position tokens back into the underlying LP tokens.
    pub async fn unstake(
        &self,
        position_mint: &Pubkey,
        lp_amount: TokenAmount,
        owner: Option<Pubkey>,
    ) -> ClientResult<I, TransactionBuilder> {
        let owner = owner.unwrap_or_else(|| self.client.signer());

        self.staking
            .unstake(position_mint, lp_amount.amount, &owner)
            .await
            .map_err(ClientError::Staking)
    }
}
