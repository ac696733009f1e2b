use crate::crypto::block_text;
use crate::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use crate::crypto::des_key_expansion::DesKeyExpansion;
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::des_transformation::DesTransformation;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::permute_bits;
use log::debug;
use std::sync::Arc;

pub const DES_BLOCK_SIZE: usize = 8;
pub const DES_KEY_SIZE: usize = 8;
const DES_ROUNDS: usize = 16;

pub struct Des {
    feistel_network: FeistelNetwork,
    key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
    round_keys: Vec<Vec<u8>>,
}

impl Des {
    pub fn new() -> Self {
        Des::with_parts(Arc::new(DesKeyExpansion), Arc::new(DesTransformation))
    }

    /// Constructor with injectable key schedule and round function, kept as
    /// the seam for Feistel-family variants.
    pub fn with_parts(
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        Des {
            feistel_network: FeistelNetwork::new(DES_ROUNDS, transformation),
            key_expansion,
            round_keys: Vec::new(),
        }
    }

    pub fn with_key(key: &[u8]) -> Result<Self, CipherError> {
        let mut des = Des::new();
        des.set_key(key)?;
        Ok(des)
    }

    fn check_block(&self, block: &[u8]) -> Result<(), CipherError> {
        if self.round_keys.is_empty() {
            return Err(CipherError::InvalidKeyLength { expected: DES_KEY_SIZE, actual: 0 });
        }
        if block.len() != DES_BLOCK_SIZE {
            return Err(CipherError::InvalidBlockLength {
                expected: DES_BLOCK_SIZE,
                actual: block.len(),
            });
        }
        Ok(())
    }

    /// One-call text interface: `0x`-hex or raw-text block and key.
    pub fn encrypt_text(plain_text: &str, key: &str) -> Result<String, CipherError> {
        let key_bytes = block_text::parse_key(key, DES_KEY_SIZE)?;
        let block = block_text::parse_block(plain_text, DES_BLOCK_SIZE)?;
        let des = Des::with_key(&key_bytes)?;
        let out = des.encrypt_block(&block.bytes)?;
        Ok(block_text::format_block(&out, block.encoding))
    }

    pub fn decrypt_text(cipher_text: &str, key: &str) -> Result<String, CipherError> {
        let key_bytes = block_text::parse_key(key, DES_KEY_SIZE)?;
        let block = block_text::parse_block(cipher_text, DES_BLOCK_SIZE)?;
        let des = Des::with_key(&key_bytes)?;
        let out = des.decrypt_block(&block.bytes)?;
        Ok(block_text::format_block(&out, block.encoding))
    }
}

impl Default for Des {
    fn default() -> Self {
        Des::new()
    }
}

impl CipherAlgorithm for Des {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;
        let permuted = permute_bits(block, &IP);
        let mixed = self.feistel_network.encrypt_with_round_keys(&permuted, &self.round_keys);
        Ok(permute_bits(&mixed, &FP))
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;
        let permuted = permute_bits(block, &IP);
        let mixed = self.feistel_network.decrypt_with_round_keys(&permuted, &self.round_keys);
        Ok(permute_bits(&mixed, &FP))
    }

    fn block_size(&self) -> usize {
        DES_BLOCK_SIZE
    }
}

impl SymmetricCipher for Des {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if key.len() != DES_KEY_SIZE {
            return Err(CipherError::InvalidKeyLength {
                expected: DES_KEY_SIZE,
                actual: key.len(),
            });
        }
        self.round_keys = self.key_expansion.generate_round_keys(key);
        debug!("derived {} DES round keys", self.round_keys.len());
        Ok(())
    }
}
