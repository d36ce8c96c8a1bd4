//! Client SDK for the Cashio protocol.
//!
//! Builds the transactions for every supported operation against the
//! deployed bankman and brrr programs. Nothing here submits on its own:
//! every operation returns a [TransactionBuilder] bundle that stays inert
//! until the caller sends it through the network interface.

use std::sync::Arc;

use solana_sdk::pubkey::Pubkey;

use cashio_solana_client::{transaction::ToTransaction, NetworkUserInterface};

mod client;
pub mod config;

pub mod bankman;
pub mod brrr;
pub mod staking;
pub mod swaps;
pub mod tokens;

pub use cashio_solana_client::transaction::TransactionBuilder;
pub use client::{ClientError, ClientResult};
pub use config::CashioConfig;
pub use staking::StakingProvider;
pub use swaps::SwapPool;
pub use tokens::TokenAmount;

use bankman::BankmanClient;
use brrr::BrrrClient;
use client::ClientState;

/// Central client object for interacting with the protocol.
#[derive(Clone)]
pub struct CashioClient<I, S> {
    client: Arc<ClientState<I>>,
    staking: Arc<S>,
}

impl<I: NetworkUserInterface, S: StakingProvider> CashioClient<I, S> {
    /// Create the client state. Each client carries its own network handle
    /// and configuration; independent clients never share state.
    pub fn new(interface: I, config: CashioConfig, staking: S) -> Self {
        Self {
            client: Arc::new(ClientState::new(interface, config)),
            staking: Arc::new(staking),
        }
    }

    /// The wallet address used as the default payer and authority.
    pub fn signer(&self) -> Pubkey {
        self.client.signer()
    }

    /// The protocol configuration for this client.
    pub fn config(&self) -> &CashioConfig {
        self.client.config()
    }

    /// Get the client for the bankman program.
    pub fn bankman(&self) -> BankmanClient<I> {
        BankmanClient::new(self.client.clone())
    }

    /// Get the client for the brrr program.
    pub fn brrr(&self) -> BrrrClient<I, S> {
        BrrrClient::new(self.client.clone(), self.staking.clone())
    }

    /// Submit a transaction through the network interface and wait for the
    /// result.
    pub async fn send(&self, transaction: &impl ToTransaction) -> ClientResult<I, ()> {
        self.client.send(transaction).await
    }

    /// Submit transactions in order through the network interface.
    pub async fn send_ordered(
        &self,
        transactions: impl IntoIterator<Item = impl ToTransaction>,
    ) -> ClientResult<I, ()> {
        self.client.send_ordered(transactions).await
    }
}
