use hex_literal::hex;
use symmetric_cipher::crypto::des_key_expansion::DesKeyExpansion;
use symmetric_cipher::crypto::key_expansion::KeyExpansion;

#[test]
fn test_sixteen_subkeys_of_48_bits() {
    let round_keys = DesKeyExpansion.generate_round_keys(&hex!("13 34 57 79 9B BC DF F1"));
    assert_eq!(round_keys.len(), 16);
    for subkey in &round_keys {
        assert_eq!(subkey.len(), 6);
    }
}

#[test]
fn test_first_subkey_matches_worked_example() {
    // The widely published schedule for key 133457799BBCDFF1:
    // K1 = 000110 110000 001011 101111 111111 000111 000001 110010.
    let round_keys = DesKeyExpansion.generate_round_keys(&hex!("13 34 57 79 9B BC DF F1"));
    assert_eq!(round_keys[0], hex!("1B 02 EF FC 70 72"));
}

#[test]
fn test_schedule_is_deterministic() {
    let key = hex!("0E 32 92 32 EA 6D 0D 73");
    let first = DesKeyExpansion.generate_round_keys(&key);
    let second = DesKeyExpansion.generate_round_keys(&key);
    assert_eq!(first, second);
}

#[test]
fn test_distinct_keys_give_distinct_schedules() {
    let a = DesKeyExpansion.generate_round_keys(&hex!("13 34 57 79 9B BC DF F1"));
    let b = DesKeyExpansion.generate_round_keys(&hex!("13 34 57 79 9B BC DF F0"));
    // The last key byte differs only in a parity bit, which PC-1 discards.
    assert_eq!(a, b);

    let c = DesKeyExpansion.generate_round_keys(&hex!("23 34 57 79 9B BC DF F1"));
    assert_ne!(a, c);
}
