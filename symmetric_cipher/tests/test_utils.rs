use symmetric_cipher::crypto::des_tables::{FP, IP};
use symmetric_cipher::crypto::utils::*;

#[test]
fn test_bytes_to_bits_msb_first() {
    let input = vec![0b10101010, 0b11001100];
    let bits = bytes_to_bits(&input);
    assert_eq!(bits.len(), 16);
    assert!(bits[0]);
    assert!(!bits[1]);
    assert!(bits[8]);
    assert!(!bits[15]);
}

#[test]
fn test_bits_to_bytes_roundtrip() {
    let input = vec![0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];
    assert_eq!(bits_to_bytes(&bytes_to_bits(&input)), input);
}

#[test]
fn test_permute_identity() {
    let table: Vec<usize> = (1..=16).collect();
    let input = vec![0b10101010, 0b11001100];
    assert_eq!(permute_bits(&input, &table), input);
}

#[test]
fn test_permute_reversal() {
    let table: Vec<usize> = (1..=8).rev().collect();
    let input = vec![0b10010110];
    assert_eq!(permute_bits(&input, &table), vec![0b01101001]);
}

#[test]
fn test_permute_expansion_repeats_bits() {
    // A table may select the same source bit more than once.
    let table = vec![1, 1, 8, 8];
    let input = vec![0b10000001];
    let out = permute_bits(&input, &table);
    assert_eq!(out, vec![0b11110000]);
}

#[test]
fn test_ip_fp_are_mutual_inverses() {
    let block = vec![0x0F, 0x1E, 0x2D, 0x3C, 0x4B, 0x5A, 0x69, 0x78];
    let forward = permute_bits(&block, &IP);
    assert_eq!(permute_bits(&forward, &FP), block);
}

#[test]
fn test_xor_bytes() {
    assert_eq!(xor_bytes(&[0xFF, 0x0F], &[0x0F, 0x0F]), vec![0xF0, 0x00]);
}
