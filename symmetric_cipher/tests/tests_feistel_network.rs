use std::sync::Arc;
use symmetric_cipher::crypto::encryption_transformation::EncryptionTransformation;
use symmetric_cipher::crypto::feistel_network::FeistelNetwork;

struct MockTransformation;
impl EncryptionTransformation for MockTransformation {
    fn transform(&self, block: &[u8], round_key: &[u8]) -> Vec<u8> {
        block
            .iter()
            .zip(round_key.iter().cycle())
            .map(|(b, k)| b ^ k)
            .collect()
    }
}

fn mock_round_keys() -> Vec<Vec<u8>> {
    vec![vec![0x0F; 4], vec![0x3C; 4], vec![0xA5; 4]]
}

#[test]
fn test_feistel_encrypt_decrypt_roundtrip() {
    let network = FeistelNetwork::new(3, Arc::new(MockTransformation));

    let block = b"\x12\x34\x56\x78\x9A\xBC\xDE\xF0";
    let round_keys = mock_round_keys();

    let encrypted = network.encrypt_with_round_keys(block, &round_keys);
    let decrypted = network.decrypt_with_round_keys(&encrypted, &round_keys);

    assert_eq!(decrypted, block);
}

#[test]
fn test_feistel_preserves_block_size() {
    let network = FeistelNetwork::new(3, Arc::new(MockTransformation));

    let block = b"\x00\x11\x22\x33\x44\x55\x66\x77";
    let encrypted = network.encrypt_with_round_keys(block, &mock_round_keys());
    assert_eq!(encrypted.len(), block.len());
}

#[test]
fn test_feistel_final_swap_omitted() {
    // One round maps (L, R) to (R, L ^ f(R)); without the final swap the
    // output is (L ^ f(R)) || R.
    let network = FeistelNetwork::new(1, Arc::new(MockTransformation));
    let round_keys = vec![vec![0u8; 4]];
    let block = [1u8, 2, 3, 4, 5, 6, 7, 8];

    let out = network.encrypt_with_round_keys(&block, &round_keys);
    // f(R) with zero key is R, so new right = L ^ R.
    assert_eq!(&out[..4], &[1 ^ 5, 2 ^ 6, 3 ^ 7, 4 ^ 8]);
    assert_eq!(&out[4..], &[5, 6, 7, 8]);
}
