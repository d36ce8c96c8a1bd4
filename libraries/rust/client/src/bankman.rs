use std::sync::Arc;

use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};

use cashio_instructions::{
    bankman,
    derive::{derive_bank, derive_collateral, derive_crate_token},
    state::{Bank, Collateral},
    token, CASH_DECIMALS,
};
use cashio_solana_client::{
    transaction::{TransactionBuilder, WithSigner},
    util::data::Concat,
    NetworkUserInterface,
};

use crate::client::{ClientError, ClientResult, ClientState};
use crate::tokens::TokenAmount;

/// Client for the bankman program: bank provisioning and collateral
/// administration.
#[derive(Clone)]
pub struct BankmanClient<I> {
    client: Arc<ClientState<I>>,
}

/// Parameters for creating a new bank. Every field defaults: a fresh mint is
/// generated, and the admin and payer fall back to the wallet signer.
#[derive(Default)]
pub struct NewBankParams {
    /// Keypair of the crate mint to create.
    pub mint: Option<Keypair>,
    /// The admin, who becomes both curator and bankman.
    pub admin: Option<Pubkey>,
    pub payer: Option<Pubkey>,
}

/// Result of building a new-bank transaction.
pub struct NewBank {
    pub transaction: TransactionBuilder,
    pub bank: Pubkey,
    pub crate_token: Pubkey,
    pub crate_mint: Pubkey,
}

/// Result of building an authorize-collateral transaction.
pub struct AuthorizeCollateral {
    pub transaction: TransactionBuilder,
    pub collateral: Pubkey,
}

impl<I: NetworkUserInterface> BankmanClient<I> {
    pub(crate) fn new(inner: Arc<ClientState<I>>) -> Self {
        Self { client: inner }
    }

    /// Read the bank record at an address. Fails with
    /// [ClientError::BankNotFound] when the account does not exist.
    pub async fn get_bank(&self, address: &Pubkey) -> ClientResult<I, Bank> {
        self.client.get_bank(address).await
    }

    /// Read the collateral record for a (bank, mint) pair, if authorized.
    pub async fn get_collateral(
        &self,
        bank: &Pubkey,
        mint: &Pubkey,
    ) -> ClientResult<I, Option<Collateral>> {
        self.client.get_collateral(bank, mint).await
    }

    /// Build the transaction creating a new bank: initialize the crate mint,
    /// then register it with the bankman program. The mint initialization
    /// must land in the same atomic bundle, ahead of the registration.
    pub fn new_bank(&self, params: NewBankParams) -> ClientResult<I, NewBank> {
        let mint = params.mint.unwrap_or_else(Keypair::new);
        let admin = params.admin.unwrap_or_else(|| self.client.signer());
        let payer = params.payer.unwrap_or_else(|| self.client.signer());

        let crate_mint = mint.pubkey();
        let (crate_token, _) = derive_crate_token(&crate_mint);
        let (bank, _) = derive_bank(&crate_token);

        let init_mint = token::create_mint(
            &payer,
            &crate_mint,
            &crate_token,
            Some(&crate_token),
            CASH_DECIMALS,
        )
        .map_err(|e| ClientError::Unexpected(format!("building mint instructions: {e}")))?
        .with_signer(mint);

        let register = TransactionBuilder::from(bankman::new_bank(&crate_mint, &admin, &payer));

        Ok(NewBank {
            transaction: init_mint.cat(register),
            bank,
            crate_token,
            crate_mint,
        })
    }

    /// Build the transaction authorizing a collateral mint for a bank.
    ///
    /// Reads the bank record first (failing when the bank does not exist),
    /// then ensures the three token accounts the pool needs: the bank's
    /// holding account, the crate's holding account, and the protocol fee
    /// recipient's holding account.
    pub async fn authorize_collateral(
        &self,
        bank: &Pubkey,
        mint: &Pubkey,
        curator: Option<Pubkey>,
        payer: Option<Pubkey>,
    ) -> ClientResult<I, AuthorizeCollateral> {
        let curator = curator.unwrap_or_else(|| self.client.signer());
        let payer = payer.unwrap_or_else(|| self.client.signer());

        let bank_state = self.client.get_bank(bank).await?;
        let (collateral, _) = derive_collateral(bank, mint);

        let mut instructions = vec![];
        self.client
            .with_token_account(bank, mint, &mut instructions)
            .await?;
        self.client
            .with_token_account(&bank_state.crate_token, mint, &mut instructions)
            .await?;
        self.client
            .with_token_account(&self.client.config.fee_owner, mint, &mut instructions)
            .await?;

        instructions.push(bankman::authorize_collateral(bank, mint, &curator, &payer));

        Ok(AuthorizeCollateral {
            transaction: instructions.into(),
            collateral,
        })
    }

    /// Build the transaction setting the hard cap of an authorized
    /// collateral, denominated in the collateral mint's base units.
    pub fn set_collateral_hard_cap(
        &self,
        bank: &Pubkey,
        hard_cap: TokenAmount,
        curator: Option<Pubkey>,
    ) -> TransactionBuilder {
        let curator = curator.unwrap_or_else(|| self.client.signer());

        bankman::set_collateral_hard_cap(bank, &hard_cap.mint, hard_cap.amount, &curator).into()
    }

    /// Build the transaction handing the curator role to another account.
    pub fn set_curator(
        &self,
        bank: &Pubkey,
        next_curator: &Pubkey,
        bankman: Option<Pubkey>,
    ) -> TransactionBuilder {
        let bankman = bankman.unwrap_or_else(|| self.client.signer());

        bankman::set_curator(bank, &bankman, next_curator).into()
    }

    /// Build the transaction handing the bankman role to another account.
    pub fn set_bankman(
        &self,
        bank: &Pubkey,
        next_bankman: &Pubkey,
        bankman: Option<Pubkey>,
    ) -> TransactionBuilder {
        let bankman = bankman.unwrap_or_else(|| self.client.signer());

        bankman::set_bankman(bank, &bankman, next_bankman).into()
    }

    /// Build the transaction withdrawing accrued author fees to the
    /// recipient's associated token account, creating it when absent.
    pub async fn withdraw_author_fees(
        &self,
        bank: &Pubkey,
        amount: TokenAmount,
        bankman: Option<Pubkey>,
        recipient: Option<Pubkey>,
    ) -> ClientResult<I, TransactionBuilder> {
        let bankman = bankman.unwrap_or_else(|| self.client.signer());
        let recipient = recipient.unwrap_or_else(|| self.client.signer());

        let mut instructions = vec![];
        let destination = self
            .client
            .with_token_account(&recipient, &amount.mint, &mut instructions)
            .await?;

        instructions.push(bankman::withdraw_author_fee(
            bank,
            &amount.mint,
            amount.amount,
            &bankman,
            &destination,
        ));

        Ok(instructions.into())
    }
}
