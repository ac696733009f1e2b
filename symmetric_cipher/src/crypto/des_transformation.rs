use crate::crypto::des_tables::{E, P, S_BOXES};
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::utils::{permute_bits, xor_bytes};

/// The DES f-function: expansion, subkey mix, S-box substitution, permutation.
pub struct DesTransformation;

fn get_bit(data: &[u8], bit_pos: usize) -> u8 {
    (data[bit_pos / 8] >> (7 - bit_pos % 8)) & 1
}

fn set_next_4_bits(dest: &mut [u8; 4], val: u8, start_bit: usize) {
    for i in 0..4 {
        let bit_val = (val >> (3 - i)) & 1;
        let bit_pos = start_bit + i;
        dest[bit_pos / 8] |= bit_val << (7 - bit_pos % 8);
    }
}

impl EncryptionTransformation for DesTransformation {
    fn transform(&self, r_block: &[u8], round_key: &[u8]) -> Vec<u8> {
        // 1. Expand the 32-bit half to 48 bits.
        let expanded = permute_bits(r_block, &E);

        // 2. Mix in the subkey.
        let mixed = xor_bytes(&expanded, round_key);

        // 3. Eight 6-bit groups through the S-boxes. The outer two bits pick
        //    the row, the inner four the column.
        let mut substituted = [0u8; 4];
        for box_i in 0..8 {
            let start = box_i * 6;
            let row = (get_bit(&mixed, start) << 1) | get_bit(&mixed, start + 5);
            let mut col = 0u8;
            for j in 1..5 {
                col = (col << 1) | get_bit(&mixed, start + j);
            }
            let s_val = S_BOXES[box_i][(row * 16 + col) as usize];
            set_next_4_bits(&mut substituted, s_val, box_i * 4);
        }

        // 4. P-permutation of the 32-bit result.
        permute_bits(&substituted, &P)
    }
}
