use bitvec::prelude::{BitVec, Msb0};

/// MSB-first bit string, so index 0 is the highest bit of the first byte.
/// FIPS 46-3 numbers bits 1..=64 in exactly this order.
pub type Bits = BitVec<u8, Msb0>;

pub fn bytes_to_bits(input: &[u8]) -> Bits {
    let mut bits = Bits::with_capacity(input.len() * 8);
    for &byte in input {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 != 0);
        }
    }
    bits
}

pub fn bits_to_bytes(bits: &Bits) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len().div_ceil(8));
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (i, bit) in chunk.iter().enumerate() {
            if *bit {
                byte |= 1 << (7 - i);
            }
        }
        bytes.push(byte);
    }
    bytes
}

/// Reorders bits through a 1-based selection table. The output carries one bit
/// per table entry, so the same routine covers straight permutations (IP, P),
/// selections (PC-1, PC-2) and expansions with repetition (E).
pub fn permute_bits(data: &[u8], table: &[usize]) -> Vec<u8> {
    let bits = bytes_to_bits(data);
    let mut permuted = Bits::with_capacity(table.len());
    for &pos in table {
        permuted.push(bits[pos - 1]);
    }
    bits_to_bytes(&permuted)
}

pub fn xor_bytes(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect()
}
