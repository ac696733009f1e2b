use crate::crypto::block_text;
use crate::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use crate::crypto::des::{DES_BLOCK_SIZE, DES_KEY_SIZE, Des};
use crate::crypto::error::CipherError;

/// Two-key Triple DES in the standard EDE composition:
/// `C = E(K1, D(K2, E(K1, P)))` and `P = D(K1, E(K2, D(K1, C)))`.
pub struct TripleDes {
    first: Des,
    second: Des,
}

pub const TRIPLE_DES_KEY_SIZE: usize = 2 * DES_KEY_SIZE;

impl TripleDes {
    pub fn new() -> Self {
        TripleDes { first: Des::new(), second: Des::new() }
    }

    pub fn with_keys(key1: &[u8], key2: &[u8]) -> Result<Self, CipherError> {
        let mut cipher = TripleDes::new();
        cipher.set_keys(key1, key2)?;
        Ok(cipher)
    }

    /// Sets the ordered key pair; both keys must be independent 8-byte DES keys.
    pub fn set_keys(&mut self, key1: &[u8], key2: &[u8]) -> Result<(), CipherError> {
        self.first.set_key(key1)?;
        self.second.set_key(key2)?;
        Ok(())
    }

    /// One-call text interface over an ordered pair of keys.
    pub fn encrypt_text(plain_text: &str, keys: (&str, &str)) -> Result<String, CipherError> {
        let key1 = block_text::parse_key(keys.0, DES_KEY_SIZE)?;
        let key2 = block_text::parse_key(keys.1, DES_KEY_SIZE)?;
        let block = block_text::parse_block(plain_text, DES_BLOCK_SIZE)?;
        let cipher = TripleDes::with_keys(&key1, &key2)?;
        let out = cipher.encrypt_block(&block.bytes)?;
        Ok(block_text::format_block(&out, block.encoding))
    }

    pub fn decrypt_text(cipher_text: &str, keys: (&str, &str)) -> Result<String, CipherError> {
        let key1 = block_text::parse_key(keys.0, DES_KEY_SIZE)?;
        let key2 = block_text::parse_key(keys.1, DES_KEY_SIZE)?;
        let block = block_text::parse_block(cipher_text, DES_BLOCK_SIZE)?;
        let cipher = TripleDes::with_keys(&key1, &key2)?;
        let out = cipher.decrypt_block(&block.bytes)?;
        Ok(block_text::format_block(&out, block.encoding))
    }
}

impl Default for TripleDes {
    fn default() -> Self {
        TripleDes::new()
    }
}

impl CipherAlgorithm for TripleDes {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        let stage1 = self.first.encrypt_block(block)?;
        let stage2 = self.second.decrypt_block(&stage1)?;
        self.first.encrypt_block(&stage2)
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        let stage1 = self.first.decrypt_block(block)?;
        let stage2 = self.second.encrypt_block(&stage1)?;
        self.first.decrypt_block(&stage2)
    }

    fn block_size(&self) -> usize {
        DES_BLOCK_SIZE
    }
}

impl SymmetricCipher for TripleDes {
    /// Accepts the two keys concatenated, `K1 || K2`, 16 bytes total.
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if key.len() != TRIPLE_DES_KEY_SIZE {
            return Err(CipherError::InvalidKeyLength {
                expected: TRIPLE_DES_KEY_SIZE,
                actual: key.len(),
            });
        }
        self.set_keys(&key[..DES_KEY_SIZE], &key[DES_KEY_SIZE..])
    }
}
