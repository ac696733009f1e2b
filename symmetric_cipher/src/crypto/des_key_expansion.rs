use crate::crypto::des_tables::{PC1, PC2};
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::{Bits, bits_to_bytes, bytes_to_bits, permute_bits};

/// Left-rotation amounts per round: one bit for rounds 1, 2, 9 and 16,
/// two bits otherwise.
const SHIFT_BITS: [usize; 16] = [
    1, 1, 2, 2, 2, 2, 2, 2,
    1, 2, 2, 2, 2, 2, 2, 1,
];

pub struct DesKeyExpansion;

impl KeyExpansion for DesKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Vec<Vec<u8>> {
        assert_eq!(key.len(), 8, "DES key expansion needs an 8-byte key");

        // PC-1 drops the parity bits and reorders the remaining 56.
        let permuted = permute_bits(key, &PC1);
        let bits = bytes_to_bits(&permuted);

        let mut c: Bits = bits.iter().by_vals().take(28).collect();
        let mut d: Bits = bits.iter().by_vals().skip(28).take(28).collect();

        let mut round_keys = Vec::with_capacity(16);
        for &shift in &SHIFT_BITS {
            c.rotate_left(shift);
            d.rotate_left(shift);

            let mut cd = Bits::with_capacity(56);
            cd.extend(c.iter().by_vals());
            cd.extend(d.iter().by_vals());

            // PC-2 selects 48 of the 56 bits for this round's subkey.
            let subkey = permute_bits(&bits_to_bytes(&cd), &PC2);
            round_keys.push(subkey);
        }

        round_keys
    }
}
