use crate::rijndael::sbox::SBOX;

pub const ROUND_COUNT: usize = 10;
pub const ROUND_KEY_COUNT: usize = ROUND_COUNT + 1;

/// Round constants: each is the previous doubled in GF(2^8).
pub const RCON: [u8; ROUND_COUNT] = [
    0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1B, 0x36,
];

/// Expands a 128-bit key into the 11 round keys, column-major bytes.
/// Round key 0 is the master key; each later key is derived from its
/// predecessor alone, so re-derivation is deterministic.
pub fn expand_key(key: &[u8; 16]) -> [[u8; 16]; ROUND_KEY_COUNT] {
    let mut round_keys = [[0u8; 16]; ROUND_KEY_COUNT];
    round_keys[0].copy_from_slice(key);

    for round in 1..ROUND_KEY_COUNT {
        let prev = round_keys[round - 1];

        // Last column, rotated up one byte, each byte through the S-box,
        // first byte XORed with the round constant.
        let mut word = [prev[13], prev[14], prev[15], prev[12]];
        for byte in word.iter_mut() {
            *byte = SBOX[*byte as usize];
        }
        word[0] ^= RCON[round - 1];

        let mut next = [0u8; 16];
        for i in 0..4 {
            next[i] = prev[i] ^ word[i];
        }
        for i in 4..16 {
            next[i] = next[i - 4] ^ prev[i];
        }
        round_keys[round] = next;
    }

    round_keys
}
