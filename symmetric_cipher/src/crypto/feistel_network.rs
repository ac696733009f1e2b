use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::utils::xor_bytes;
use std::sync::Arc;

/// Generic Feistel driver: splits the block in half and runs a fixed number
/// of rounds of `(L, R) -> (R, L xor f(R, k))`. After the last round the
/// half-swap is omitted, so the output is `R_n || L_n`; this makes decryption
/// the same walk with the subkeys reversed.
pub struct FeistelNetwork {
    rounds: usize,
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(
        rounds: usize,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        Self { rounds, transformation }
    }

    pub fn encrypt_with_round_keys(&self, block: &[u8], round_keys: &[Vec<u8>]) -> Vec<u8> {
        self.run(block, round_keys.iter())
    }

    pub fn decrypt_with_round_keys(&self, block: &[u8], round_keys: &[Vec<u8>]) -> Vec<u8> {
        self.run(block, round_keys.iter().rev())
    }

    fn run<'a, I>(&self, block: &[u8], round_keys: I) -> Vec<u8>
    where
        I: Iterator<Item = &'a Vec<u8>>,
    {
        let half = block.len() / 2;
        let mut left = block[..half].to_vec();
        let mut right = block[half..].to_vec();

        for round_key in round_keys.take(self.rounds) {
            let mixed = self.transformation.transform(&right, round_key);
            let new_right = xor_bytes(&left, &mixed);
            left = right;
            right = new_right;
        }

        // Final swap omitted.
        let mut out = right;
        out.extend_from_slice(&left);
        out
    }
}
