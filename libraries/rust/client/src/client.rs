use std::error::Error as StdError;
use thiserror::Error;

use solana_sdk::{hash::Hash, instruction::Instruction, pubkey::Pubkey};
use spl_associated_token_account::{
    get_associated_token_address, instruction::create_associated_token_account,
};

use cashio_instructions::{derive::derive_collateral, state::{Bank, Collateral}};
use cashio_solana_client::{
    transaction::ToTransaction, ExtError, NetworkUserInterface, NetworkUserInterfaceExt,
};

use crate::config::CashioConfig;

pub type ClientResult<I, T> = std::result::Result<T, ClientError<I>>;

#[derive(Error)]
pub enum ClientError<I: NetworkUserInterface> {
    #[error("interface error")]
    Interface(I::Error),

    #[error("decode error: {0}")]
    Deserialize(Box<dyn StdError + Send + Sync>),

    #[error("no bank found: {0}")]
    BankNotFound(Pubkey),

    #[error("staking error: {0}")]
    Staking(Box<dyn StdError + Send + Sync>),

    #[error("error: {0}")]
    Unexpected(String),
}

impl<I: NetworkUserInterface> std::fmt::Debug for ClientError<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "interface error"),
            Self::Deserialize(e) => write!(f, "decode error: {}", e),
            Self::BankNotFound(address) => write!(f, "no bank found: {}", address),
            Self::Staking(e) => write!(f, "staking error: {}", e),
            Self::Unexpected(e) => write!(f, "error: {}", e),
        }
    }
}

impl<I: NetworkUserInterface> From<ExtError<I>> for ClientError<I> {
    fn from(e: ExtError<I>) -> Self {
        match e {
            ExtError::Interface(err) => Self::Interface(err),
            ExtError::Unpack { error, .. } => Self::Deserialize(Box::new(error)),
            ExtError::Deserialize { error, .. } => Self::Deserialize(Box::new(error)),
        }
    }
}

/// Central object for client implementations, containing the network handle
/// and the protocol configuration.
pub struct ClientState<I> {
    pub(crate) network: I,
    pub(crate) config: CashioConfig,
}

impl<I: NetworkUserInterface> ClientState<I> {
    pub fn new(network: I, config: CashioConfig) -> Self {
        Self { network, config }
    }

    pub fn signer(&self) -> Pubkey {
        self.network.signer()
    }

    pub fn config(&self) -> &CashioConfig {
        &self.config
    }

    pub async fn account_exists(&self, address: &Pubkey) -> ClientResult<I, bool> {
        self.network
            .account_exists(address)
            .await
            .map_err(ClientError::Interface)
    }

    pub async fn get_latest_blockhash(&self) -> ClientResult<I, Hash> {
        self.network
            .get_latest_blockhash()
            .await
            .map_err(ClientError::Interface)
    }

    /// Submit transactions in order, through the network interface.
    pub async fn send_ordered(
        &self,
        transactions: impl IntoIterator<Item = impl ToTransaction>,
    ) -> ClientResult<I, ()> {
        let recent_blockhash = self.get_latest_blockhash().await?;
        let txs = transactions
            .into_iter()
            .map(|tx| tx.to_transaction(&self.signer(), recent_blockhash))
            .collect::<Vec<_>>();

        log::debug!("sending {} transactions", txs.len());
        let (signatures, error) = self.network.send_ordered(&txs).await;

        for (index, signature) in signatures.iter().enumerate() {
            log::info!("tx result success: #{index} {signature}");
        }

        if let Some(error) = error {
            log::error!("tx result failed: #{}: {error:?}", signatures.len());
            return Err(ClientError::Interface(error));
        }

        Ok(())
    }

    pub async fn send(&self, transaction: &impl ToTransaction) -> ClientResult<I, ()> {
        self.send_ordered([transaction]).await
    }

    /// Fetch and decode a bank record. A missing account is a hard error,
    /// raised before the caller builds any instruction.
    pub async fn get_bank(&self, address: &Pubkey) -> ClientResult<I, Bank> {
        self.network
            .get_anchor_account::<Bank>(address)
            .await?
            .ok_or(ClientError::BankNotFound(*address))
    }

    /// Fetch and decode the collateral record for a (bank, mint) pair, if it
    /// has been authorized.
    pub async fn get_collateral(
        &self,
        bank: &Pubkey,
        mint: &Pubkey,
    ) -> ClientResult<I, Option<Collateral>> {
        let (address, _) = derive_collateral(bank, mint);

        Ok(self.network.get_anchor_account::<Collateral>(&address).await?)
    }

    /// Resolve the associated token account for an owner, appending a create
    /// instruction only when the account does not exist yet.
    pub(crate) async fn with_token_account(
        &self,
        owner: &Pubkey,
        token: &Pubkey,
        ixns: &mut Vec<Instruction>,
    ) -> ClientResult<I, Pubkey> {
        let address = get_associated_token_address(owner, token);

        if !self.account_exists(&address).await? {
            ixns.push(create_associated_token_account(
                &self.signer(),
                owner,
                token,
                &spl_token::ID,
            ));
        }

        Ok(address)
    }
}
