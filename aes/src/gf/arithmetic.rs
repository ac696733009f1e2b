use crate::gf::tables::{EXP, LOG};

/// Multiplication by x (i.e. 2): shift left, reduce by 0x1B when the high
/// bit falls out.
pub fn xtime(a: u8) -> u8 {
    let shifted = ((a as u16) << 1) as u8;
    if a & 0x80 != 0 { shifted ^ 0x1B } else { shifted }
}

pub fn mul3(a: u8) -> u8 {
    xtime(a) ^ a
}

/// General product via the log/antilog pair.
pub fn mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let log_sum = LOG[a as usize] as usize + LOG[b as usize] as usize;
    EXP[log_sum % 255]
}

/// Reference shift-and-add product, kept as an independent cross-check of
/// the table-based path.
pub fn mul_shift(mut a: u8, mut b: u8) -> u8 {
    let mut acc = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            acc ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    acc
}
