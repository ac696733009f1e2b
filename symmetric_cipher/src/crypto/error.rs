use thiserror::Error;

/// Input-shape and encoding errors surfaced before any round processing.
///
/// A lookup index computed outside its table range is a defect in the static
/// tables or the round arithmetic, not a recoverable condition; it panics via
/// ordinary slice indexing instead of appearing here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("invalid block length: expected {expected} bytes, got {actual}")]
    InvalidBlockLength { expected: usize, actual: usize },

    #[error("invalid encoding: non-hexadecimal character {found:?} after 0x prefix")]
    InvalidEncoding { found: char },

    /// Reserved for key-recovery interfaces; the block ciphers never raise it.
    #[error("ciphertext-only analysis is not supported")]
    InvalidAnalysis,
}
