pub trait EncryptionTransformation {
    /// The round function: maps one half-block under one round key.
    fn transform(&self, input_block: &[u8], round_key: &[u8]) -> Vec<u8>;
}
