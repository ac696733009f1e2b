//! Log/antilog tables for GF(2^8) under the AES reduction polynomial
//! x^8 + x^4 + x^3 + x + 1, built at compile time over the generator 0x03.

pub(crate) const fn xtime_const(a: u8) -> u8 {
    let shifted = ((a as u16) << 1) as u8;
    if a & 0x80 != 0 { shifted ^ 0x1B } else { shifted }
}

pub(crate) const fn build_exp() -> [u8; 256] {
    let mut exp = [0u8; 256];
    let mut x: u8 = 1;
    let mut i = 0;
    while i < 256 {
        exp[i] = x;
        x = xtime_const(x) ^ x;
        i += 1;
    }
    exp
}

pub(crate) const fn build_log() -> [u8; 256] {
    let exp = build_exp();
    let mut log = [0u8; 256];
    let mut i = 0;
    while i < 255 {
        log[exp[i] as usize] = i as u8;
        i += 1;
    }
    log
}

/// Antilog table: `EXP[i]` is the generator raised to the i-th power.
/// `EXP[255] == EXP[0]` since the generator has order 255.
pub static EXP: [u8; 256] = build_exp();

/// Log table; `LOG[0]` is unused (zero has no logarithm).
pub static LOG: [u8; 256] = build_log();
