pub trait KeyExpansion {
    /// Derives the per-round subkeys, in encryption order.
    fn generate_round_keys(&self, key: &[u8]) -> Vec<Vec<u8>>;
}
