//! Text-level block encoding: a `0x`-prefixed string is big-endian hex for
//! exactly one block's bytes; anything else is raw text whose bytes are taken
//! directly. Hex is case-insensitive on input and uppercase on output, with
//! the prefix preserved.

use crate::crypto::error::CipherError;
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEncoding {
    Hex,
    Raw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub bytes: Vec<u8>,
    pub encoding: BlockEncoding,
}

fn parse_exact<F>(text: &str, expected_len: usize, length_error: F) -> Result<TextBlock, CipherError>
where
    F: Fn(usize) -> CipherError,
{
    match text.strip_prefix("0x") {
        Some(digits) => {
            if let Some(found) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
                return Err(CipherError::InvalidEncoding { found });
            }
            if digits.len() != expected_len * 2 {
                return Err(length_error(digits.len() / 2));
            }
            let bytes = (0..expected_len)
                .map(|i| {
                    u8::from_str_radix(&digits[2 * i..2 * i + 2], 16)
                        .expect("digits were validated as hexadecimal")
                })
                .collect();
            trace!("parsed {expected_len}-byte hex block");
            Ok(TextBlock { bytes, encoding: BlockEncoding::Hex })
        }
        None => {
            let bytes = text.as_bytes();
            if bytes.len() != expected_len {
                return Err(length_error(bytes.len()));
            }
            trace!("parsed {expected_len}-byte raw text block");
            Ok(TextBlock { bytes: bytes.to_vec(), encoding: BlockEncoding::Raw })
        }
    }
}

/// Parses exactly one block, validating shape before any cipher work starts.
pub fn parse_block(text: &str, block_len: usize) -> Result<TextBlock, CipherError> {
    parse_exact(text, block_len, |actual| CipherError::InvalidBlockLength {
        expected: block_len,
        actual,
    })
}

/// Parses a key of exactly `key_len` bytes.
pub fn parse_key(text: &str, key_len: usize) -> Result<Vec<u8>, CipherError> {
    let parsed = parse_exact(text, key_len, |actual| CipherError::InvalidKeyLength {
        expected: key_len,
        actual,
    })?;
    Ok(parsed.bytes)
}

/// Renders transformed bytes back in the form the input block arrived in.
/// Raw output falls back to hex when the bytes are not valid UTF-8, since an
/// arbitrary ciphertext block rarely is.
pub fn format_block(bytes: &[u8], encoding: BlockEncoding) -> String {
    match encoding {
        BlockEncoding::Hex => to_hex(bytes),
        BlockEncoding::Raw => match String::from_utf8(bytes.to_vec()) {
            Ok(text) => text,
            Err(_) => to_hex(bytes),
        },
    }
}

fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("0x");
    for byte in bytes {
        out.push_str(&format!("{byte:02X}"));
    }
    out
}
