use crate::crypto::error::CipherError;

/// Single-block transform contract shared by every engine in the workspace.
pub trait CipherAlgorithm {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn block_size(&self) -> usize;
}

pub trait SymmetricCipher: CipherAlgorithm {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError>;
}
