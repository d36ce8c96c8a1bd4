use solana_sdk::hash::Hash;
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::{Signer, SignerError};
use solana_sdk::signers::Signers;
use solana_sdk::transaction::VersionedTransaction;
use solana_sdk::{instruction::Instruction, signature::Signature, transaction::Transaction};
use std::collections::HashSet;

use crate::signature::NeedsSignature;
use crate::util::data::Concat;
use crate::util::keypair::clone_vec;

/// A group of instructions that are expected to execute in the same
/// transaction. Can be merged with other TransactionBuilder instances:
/// ```rust ignore
/// let builder = builder1.cat(builder2);
/// ```
#[derive(Debug, Default)]
pub struct TransactionBuilder {
    /// see above
    pub instructions: Vec<Instruction>,
    /// Generated keypairs that will be used for the included instructions.
    /// Typically, this is used when an account needs to be initialized for
    /// this instruction.
    ///
    /// This usually does not include the payer or the user's wallet. Additional
    /// signatures should be provided by the application when needed.
    pub signers: Vec<Keypair>,
}

impl Clone for TransactionBuilder {
    fn clone(&self) -> Self {
        Self {
            instructions: self.instructions.clone(),
            signers: clone_vec(&self.signers),
        }
    }
}

impl From<Vec<Instruction>> for TransactionBuilder {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self {
            instructions,
            signers: vec![],
        }
    }
}

impl From<Instruction> for TransactionBuilder {
    fn from(ix: Instruction) -> Self {
        Self {
            instructions: vec![ix],
            signers: vec![],
        }
    }
}

impl TransactionBuilder {
    /// Cleans up any duplicate or unneeded signers.
    pub fn prune(&mut self) {
        let mut signer_pubkeys = HashSet::new();
        for signer in std::mem::take(&mut self.signers) {
            let pubkey = signer.pubkey();
            if !signer_pubkeys.contains(&pubkey) && self.instructions.needs_signature(pubkey) {
                signer_pubkeys.insert(pubkey);
                self.signers.push(signer);
            }
        }
    }

    /// Convert the TransactionBuilder into a solana Transaction.
    ///
    /// Handles the typical situation where the payer is the only additional
    /// signer needed. For arbitrary additional signers, use compile_custom or
    /// compile_partial.
    ///
    /// Returns error if any required signers are not provided.
    pub fn compile<S: Signer>(
        self,
        payer: &S,
        recent_blockhash: Hash,
    ) -> Result<Transaction, SignerError> {
        self.compile_custom(Some(&payer.pubkey()), &[payer], recent_blockhash)
    }

    /// Convert the TransactionBuilder into a solana Transaction.
    ///
    /// Returns error if any required signers are not provided.
    pub fn compile_custom<S: Signers>(
        self,
        payer: Option<&Pubkey>,
        signers: &S,
        recent_blockhash: Hash,
    ) -> Result<Transaction, SignerError> {
        let mut tx = self.compile_partial(payer, recent_blockhash);
        tx.try_sign(signers, recent_blockhash)?;
        Ok(tx)
    }

    /// Like compile, except that it will not fail if signers are missing.
    /// Intended to have other signatures, such as the payer's, added later.
    pub fn compile_partial(
        mut self,
        payer: Option<&Pubkey>,
        recent_blockhash: Hash,
    ) -> Transaction {
        self.prune();
        let mut tx = Transaction::new_unsigned(Message::new(&self.instructions, payer));
        tx.partial_sign(&self.signers.iter().collect::<Vec<_>>(), recent_blockhash);
        tx
    }

    /// convert transaction to a base64 string similar to one that would be
    /// submitted to rpc node. It uses fake signatures so it's not the real
    /// transaction, but it should have the same size.
    pub fn fake_encode(&self, payer: &Pubkey) -> Result<String, bincode::Error> {
        let mut compiled = Transaction::new_unsigned(Message::new(&self.instructions, Some(payer)));
        compiled.signatures.extend(
            (0..compiled.message.header.num_required_signatures as usize)
                .map(|_| Signature::new_unique()),
        );

        let serialized = bincode::serialize::<Transaction>(&compiled)?;
        Ok(base64::encode(serialized))
    }
}

impl Concat for TransactionBuilder {
    fn cat(mut self, other: Self) -> Self {
        self.instructions.extend(other.instructions.into_iter());
        self.signers.extend(other.signers.into_iter());

        Self { ..self }
    }

    fn cat_ref(mut self, other: &Self) -> Self {
        self.instructions
            .extend(other.instructions.clone().into_iter());
        self.signers.extend(clone_vec(&other.signers).into_iter());

        Self { ..self }
    }
}

/// Convert types to a TransactionBuilder while including signers. Serves a
/// similar purpose to From<Instruction>, but it's used when you also need to
/// add signers.
pub trait WithSigner: Sized {
    /// convert to a TransactionBuilder that includes this signer
    fn with_signer(self, signer: Keypair) -> TransactionBuilder {
        self.with_signers(vec![signer])
    }

    /// convert to a TransactionBuilder that includes these signers
    fn with_signers(self, signers: Vec<Keypair>) -> TransactionBuilder;
}

impl WithSigner for Instruction {
    fn with_signers(self, signers: Vec<Keypair>) -> TransactionBuilder {
        TransactionBuilder {
            instructions: vec![self],
            signers,
        }
    }
}

impl WithSigner for Vec<Instruction> {
    fn with_signers(self, signers: Vec<Keypair>) -> TransactionBuilder {
        TransactionBuilder {
            instructions: self,
            signers,
        }
    }
}

impl WithSigner for TransactionBuilder {
    fn with_signers(mut self, signers: Vec<Keypair>) -> TransactionBuilder {
        self.signers.extend(signers);
        self
    }
}

/// Convert into a transaction that is ready to submit, given the payer that
/// the wallet will sign for.
pub trait ToTransaction {
    fn to_transaction(&self, payer: &Pubkey, recent_blockhash: Hash) -> VersionedTransaction;
}

impl ToTransaction for TransactionBuilder {
    fn to_transaction(&self, payer: &Pubkey, recent_blockhash: Hash) -> VersionedTransaction {
        self.clone()
            .compile_partial(Some(payer), recent_blockhash)
            .into()
    }
}

impl ToTransaction for Transaction {
    fn to_transaction(&self, _payer: &Pubkey, recent_blockhash: Hash) -> VersionedTransaction {
        let mut tx = self.clone();
        tx.message.recent_blockhash = recent_blockhash;

        tx.into()
    }
}

impl ToTransaction for VersionedTransaction {
    fn to_transaction(&self, _payer: &Pubkey, _recent_blockhash: Hash) -> VersionedTransaction {
        self.clone()
    }
}

impl<T: ToTransaction> ToTransaction for &T {
    fn to_transaction(&self, payer: &Pubkey, recent_blockhash: Hash) -> VersionedTransaction {
        (*self).to_transaction(payer, recent_blockhash)
    }
}
