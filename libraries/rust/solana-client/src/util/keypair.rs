use solana_sdk::signature::Keypair;

/// Keypair does not implement Clone, but it can always be reconstructed
/// from its own bytes.
pub fn clone(keypair: &Keypair) -> Keypair {
    Keypair::from_bytes(&keypair.to_bytes()).unwrap()
}

pub fn clone_vec(keypairs: &[Keypair]) -> Vec<Keypair> {
    keypairs.iter().map(clone).collect()
}
