use std::any::Any;

use anchor_lang::AccountDeserialize;
use async_trait::async_trait;
use thiserror::Error;

use solana_sdk::{
    account::Account, hash::Hash, program_error::ProgramError, program_pack::Pack, pubkey::Pubkey,
    signature::Signature, transaction::VersionedTransaction,
};

pub mod signature;
pub mod transaction;
pub mod util;

/// A type that provides an interface to interact with the Solana network, and an associated
/// wallet that can sign transactions to be sent to the network.
#[async_trait(?Send)]
pub trait NetworkUserInterface: Clone + 'static {
    type Error: Any + std::fmt::Debug;

    /// The signing address used by this interface when sending transactions
    fn signer(&self) -> Pubkey;

    /// Get the latest blockhash from the network
    async fn get_latest_blockhash(&self) -> Result<Hash, Self::Error>;

    /// Retrieve multiple accounts in one operation
    async fn get_accounts(&self, addresses: &[Pubkey])
        -> Result<Vec<Option<Account>>, Self::Error>;

    /// Send a set of transactions to the network
    ///
    /// Must assume the transactions should be submitted in-order
    async fn send_ordered(
        &self,
        transactions: &[VersionedTransaction],
    ) -> (Vec<Signature>, Option<Self::Error>);

    /// Send a transaction message to the network
    async fn send(&self, transaction: VersionedTransaction) -> Result<Signature, Self::Error> {
        let (mut signatures, error) = self.send_ordered(&[transaction]).await;

        match signatures.pop() {
            Some(signature) => Ok(signature),
            None => Err(error.unwrap()),
        }
    }

    /// Check if accounts exist (is funded)
    async fn accounts_exist(&self, addresses: &[Pubkey]) -> Result<Vec<bool>, Self::Error> {
        Ok(self
            .get_accounts(addresses)
            .await?
            .into_iter()
            .map(|maybe_acc| maybe_acc.is_some())
            .collect())
    }

    /// Check if an account exists (is funded)
    async fn account_exists(&self, address: &Pubkey) -> Result<bool, Self::Error> {
        Ok(self.accounts_exist(&[*address]).await?[0])
    }
}

#[async_trait(?Send)]
pub trait NetworkUserInterfaceExt: NetworkUserInterface {
    async fn get_accounts_all(
        &self,
        addresses: &[Pubkey],
    ) -> Result<Vec<Option<Account>>, ExtError<Self>> {
        let mut result = vec![];

        for chunk in addresses.chunks(100) {
            let accounts = self
                .get_accounts(chunk)
                .await
                .map_err(ExtError::Interface)?;

            result.extend(accounts);
        }

        Ok(result)
    }

    async fn get_account(&self, address: &Pubkey) -> Result<Option<Account>, ExtError<Self>> {
        self.get_accounts_all(&[*address])
            .await
            .map(|list| list.into_iter().next().unwrap())
    }

    async fn account_exists(&self, address: &Pubkey) -> Result<bool, ExtError<Self>> {
        self.get_account(address)
            .await
            .map(|account| account.is_some())
    }

    async fn get_token_account(
        &self,
        address: &Pubkey,
    ) -> Result<Option<spl_token::state::Account>, ExtError<Self>> {
        match self.get_account(address).await? {
            None => Ok(None),
            Some(account) => spl_token::state::Account::unpack(&account.data)
                .map(Some)
                .map_err(|e| ExtError::Unpack {
                    address: *address,
                    error: e,
                }),
        }
    }

    async fn get_mint(
        &self,
        address: &Pubkey,
    ) -> Result<Option<spl_token::state::Mint>, ExtError<Self>> {
        match self.get_account(address).await? {
            None => Ok(None),
            Some(account) => spl_token::state::Mint::unpack(&account.data)
                .map(Some)
                .map_err(|e| ExtError::Unpack {
                    address: *address,
                    error: e,
                }),
        }
    }

    async fn get_anchor_accounts<T: AccountDeserialize>(
        &self,
        addresses: &[Pubkey],
    ) -> Result<Vec<Option<T>>, ExtError<Self>> {
        self.get_accounts_all(addresses)
            .await?
            .into_iter()
            .enumerate()
            .map(|(i, account_info)| match account_info {
                None => Ok(None),
                Some(account) => T::try_deserialize(&mut &account.data[..])
                    .map(Some)
                    .map_err(|e| ExtError::Deserialize {
                        address: addresses[i],
                        error: e,
                    }),
            })
            .collect()
    }

    async fn get_anchor_account<T: AccountDeserialize>(
        &self,
        address: &Pubkey,
    ) -> Result<Option<T>, ExtError<Self>> {
        Ok(self.get_anchor_accounts(&[*address]).await?.pop().unwrap())
    }
}

#[derive(Error, Debug)]
pub enum ExtError<I: NetworkUserInterface> {
    #[error("interface error")]
    Interface(I::Error),

    #[error("error unpacking account {address}: {error}")]
    Unpack {
        address: Pubkey,
        error: ProgramError,
    },

    #[error("error deserializing account {address}: {error}")]
    Deserialize {
        address: Pubkey,
        error: anchor_lang::error::Error,
    },
}

impl<T: NetworkUserInterface> NetworkUserInterfaceExt for T {}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap, rc::Rc};

    use solana_sdk::program_pack::Pack;
    use spl_token::state::AccountState;

    use super::*;

    #[derive(Clone, Debug)]
    struct TestInterface {
        accounts: Rc<RefCell<HashMap<Pubkey, Account>>>,
    }

    #[async_trait(?Send)]
    impl NetworkUserInterface for TestInterface {
        type Error = String;

        fn signer(&self) -> Pubkey {
            Pubkey::default()
        }

        async fn get_latest_blockhash(&self) -> Result<Hash, Self::Error> {
            Ok(Hash::default())
        }

        async fn get_accounts(
            &self,
            addresses: &[Pubkey],
        ) -> Result<Vec<Option<Account>>, Self::Error> {
            let accounts = self.accounts.borrow();
            Ok(addresses.iter().map(|a| accounts.get(a).cloned()).collect())
        }

        async fn send_ordered(
            &self,
            transactions: &[VersionedTransaction],
        ) -> (Vec<Signature>, Option<Self::Error>) {
            (
                transactions.iter().map(|_| Signature::new_unique()).collect(),
                None,
            )
        }
    }

    fn interface_with(address: Pubkey, data: Vec<u8>) -> TestInterface {
        let account = Account {
            lamports: 1,
            data,
            owner: spl_token::ID,
            executable: false,
            rent_epoch: 0,
        };

        TestInterface {
            accounts: Rc::new(RefCell::new(HashMap::from([(address, account)]))),
        }
    }

    #[tokio::test]
    async fn missing_token_account_is_none() {
        let interface = interface_with(Pubkey::new_unique(), vec![]);

        let result = interface.get_token_account(&Pubkey::new_unique()).await;

        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn token_account_unpacks_through_the_interface() {
        let address = Pubkey::new_unique();
        let token = spl_token::state::Account {
            mint: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            amount: 250,
            state: AccountState::Initialized,
            ..Default::default()
        };

        let mut data = vec![0; spl_token::state::Account::LEN];
        spl_token::state::Account::pack(token, &mut data).unwrap();

        let interface = interface_with(address, data);
        let decoded = interface.get_token_account(&address).await.unwrap().unwrap();

        assert_eq!(token.mint, decoded.mint);
        assert_eq!(250, decoded.amount);
    }

    #[tokio::test]
    async fn malformed_token_account_is_an_unpack_error() {
        let address = Pubkey::new_unique();
        let interface = interface_with(address, vec![0; 7]);

        let result = interface.get_token_account(&address).await;

        assert!(matches!(result, Err(ExtError::Unpack { .. })));
    }

    #[tokio::test]
    async fn mint_unpacks_through_the_interface() {
        let address = Pubkey::new_unique();
        let mint = spl_token::state::Mint {
            decimals: 6,
            supply: 1_000_000,
            is_initialized: true,
            ..Default::default()
        };

        let mut data = vec![0; spl_token::state::Mint::LEN];
        spl_token::state::Mint::pack(mint, &mut data).unwrap();

        let interface = interface_with(address, data);
        let decoded = interface.get_mint(&address).await.unwrap().unwrap();

        assert_eq!(6, decoded.decimals);
        assert_eq!(1_000_000, decoded.supply);
    }
}
