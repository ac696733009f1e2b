use hex_literal::hex;
use rijndael::rijndael::key_schedule::{RCON, ROUND_KEY_COUNT, expand_key};

#[test]
fn test_round_key_zero_is_master_key() {
    let key = hex!("2b 7e 15 16 28 ae d2 a6 ab f7 15 88 09 cf 4f 3c");
    let round_keys = expand_key(&key);
    assert_eq!(round_keys[0], key);
    assert_eq!(round_keys.len(), ROUND_KEY_COUNT);
}

#[test]
fn test_fips_appendix_a_expansion() {
    // FIPS-197 Appendix A.1, key 2b7e1516 28aed2a6 abf71588 09cf4f3c.
    let key = hex!("2b 7e 15 16 28 ae d2 a6 ab f7 15 88 09 cf 4f 3c");
    let round_keys = expand_key(&key);

    // w4..w7
    assert_eq!(round_keys[1], hex!("a0 fa fe 17 88 54 2c b1 23 a3 39 39 2a 6c 76 05"));
    // w40..w43
    assert_eq!(round_keys[10], hex!("d0 14 f9 a8 c9 ee 25 89 e1 3f 0c c8 b6 63 0c a6"));
}

#[test]
fn test_expansion_is_deterministic() {
    let key = hex!("00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f");
    assert_eq!(expand_key(&key), expand_key(&key));
}

#[test]
fn test_round_constants_double_under_the_field() {
    for i in 1..RCON.len() {
        let doubled = {
            let prev = RCON[i - 1];
            let shifted = ((prev as u16) << 1) as u8;
            if prev & 0x80 != 0 { shifted ^ 0x1B } else { shifted }
        };
        assert_eq!(RCON[i], doubled);
    }
}
