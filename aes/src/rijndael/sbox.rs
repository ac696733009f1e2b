//! The AES substitution box and its inverse, const-built from the field
//! inverse composed with the FIPS-197 affine map. Both are module-level
//! immutable tables, bijective on the byte range.

use crate::gf::tables::{build_exp, build_log};

/// The affine step: b'_i = b_i ^ b_{i+4} ^ b_{i+5} ^ b_{i+6} ^ b_{i+7} ^ c_i,
/// all indices mod 8, with c = 0x63.
const fn affine(x: u8) -> u8 {
    let mut result = 0u8;
    let mut i = 0;
    while i < 8 {
        let bit = ((x >> i)
            ^ (x >> ((i + 4) % 8))
            ^ (x >> ((i + 5) % 8))
            ^ (x >> ((i + 6) % 8))
            ^ (x >> ((i + 7) % 8))
            ^ (0x63 >> i))
            & 1;
        result |= bit << i;
        i += 1;
    }
    result
}

const fn build_sbox() -> [u8; 256] {
    let exp = build_exp();
    let log = build_log();
    let mut sbox = [0u8; 256];
    sbox[0] = 0x63;
    let mut x = 1;
    while x < 256 {
        let inverse = exp[255 - log[x] as usize];
        sbox[x] = affine(inverse);
        x += 1;
    }
    sbox
}

const fn build_inv_sbox() -> [u8; 256] {
    let sbox = build_sbox();
    let mut inv = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        inv[sbox[x] as usize] = x as u8;
        x += 1;
    }
    inv
}

pub static SBOX: [u8; 256] = build_sbox();
pub static INV_SBOX: [u8; 256] = build_inv_sbox();
