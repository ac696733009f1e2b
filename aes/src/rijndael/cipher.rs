use crate::gf::arithmetic::{mul, mul3, xtime};
use crate::rijndael::key_schedule::{ROUND_KEY_COUNT, expand_key};
use crate::rijndael::sbox::{INV_SBOX, SBOX};
use log::debug;
use symmetric_cipher::crypto::block_text;
use symmetric_cipher::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use symmetric_cipher::crypto::error::CipherError;

pub const AES_BLOCK_SIZE: usize = 16;
pub const AES_KEY_SIZE: usize = 16;

/// Working state for one invocation: 4 columns of 4 bytes, `state[c][r]`,
/// column-major as FIPS-197 lays the block out. Owned by the call, never
/// retained between calls.
pub type State = [[u8; 4]; 4];

fn block_to_state(block: &[u8]) -> State {
    let mut state = [[0u8; 4]; 4];
    for c in 0..4 {
        for r in 0..4 {
            state[c][r] = block[c * 4 + r];
        }
    }
    state
}

fn state_to_block(state: &State) -> Vec<u8> {
    let mut out = vec![0u8; AES_BLOCK_SIZE];
    for c in 0..4 {
        for r in 0..4 {
            out[c * 4 + r] = state[c][r];
        }
    }
    out
}

pub fn add_round_key(state: &mut State, round_key: &[u8; 16]) {
    for c in 0..4 {
        for r in 0..4 {
            state[c][r] ^= round_key[c * 4 + r];
        }
    }
}

pub fn sub_bytes(state: &mut State) {
    for col in state.iter_mut() {
        for byte in col.iter_mut() {
            *byte = SBOX[*byte as usize];
        }
    }
}

pub fn inv_sub_bytes(state: &mut State) {
    for col in state.iter_mut() {
        for byte in col.iter_mut() {
            *byte = INV_SBOX[*byte as usize];
        }
    }
}

/// Row r is rotated left by r positions.
pub fn shift_rows(state: &mut State) {
    for r in 1..4 {
        let mut tmp = [0u8; 4];
        for c in 0..4 {
            tmp[c] = state[(c + r) % 4][r];
        }
        for c in 0..4 {
            state[c][r] = tmp[c];
        }
    }
}

pub fn inv_shift_rows(state: &mut State) {
    for r in 1..4 {
        let mut tmp = [0u8; 4];
        for c in 0..4 {
            tmp[c] = state[(c + 4 - r) % 4][r];
        }
        for c in 0..4 {
            state[c][r] = tmp[c];
        }
    }
}

/// Each output byte is the GF(2^8) dot product of the column with the
/// circulant matrix rows [2,3,1,1], [1,2,3,1], [1,1,2,3], [3,1,1,2].
pub fn mix_columns(state: &mut State) {
    for col in state.iter_mut() {
        let a = *col;
        col[0] = xtime(a[0]) ^ mul3(a[1]) ^ a[2] ^ a[3];
        col[1] = a[0] ^ xtime(a[1]) ^ mul3(a[2]) ^ a[3];
        col[2] = a[0] ^ a[1] ^ xtime(a[2]) ^ mul3(a[3]);
        col[3] = mul3(a[0]) ^ a[1] ^ a[2] ^ xtime(a[3]);
    }
}

/// Inverse matrix rows [14,11,13,9], [9,14,11,13], [13,9,14,11], [11,13,9,14].
pub fn inv_mix_columns(state: &mut State) {
    for col in state.iter_mut() {
        let a = *col;
        col[0] = mul(a[0], 0x0e) ^ mul(a[1], 0x0b) ^ mul(a[2], 0x0d) ^ mul(a[3], 0x09);
        col[1] = mul(a[0], 0x09) ^ mul(a[1], 0x0e) ^ mul(a[2], 0x0b) ^ mul(a[3], 0x0d);
        col[2] = mul(a[0], 0x0d) ^ mul(a[1], 0x09) ^ mul(a[2], 0x0e) ^ mul(a[3], 0x0b);
        col[3] = mul(a[0], 0x0b) ^ mul(a[1], 0x0d) ^ mul(a[2], 0x09) ^ mul(a[3], 0x0e);
    }
}

fn encrypt_block_internal(block: &[u8], round_keys: &[[u8; 16]; ROUND_KEY_COUNT]) -> Vec<u8> {
    let mut state = block_to_state(block);

    add_round_key(&mut state, &round_keys[0]);
    for round_key in round_keys.iter().take(ROUND_KEY_COUNT - 1).skip(1) {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_key);
    }
    // Final round: MixColumns omitted.
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[ROUND_KEY_COUNT - 1]);

    state_to_block(&state)
}

fn decrypt_block_internal(block: &[u8], round_keys: &[[u8; 16]; ROUND_KEY_COUNT]) -> Vec<u8> {
    let mut state = block_to_state(block);

    add_round_key(&mut state, &round_keys[ROUND_KEY_COUNT - 1]);
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    for round_key in round_keys.iter().take(ROUND_KEY_COUNT - 1).skip(1).rev() {
        add_round_key(&mut state, round_key);
        inv_mix_columns(&mut state);
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
    }
    add_round_key(&mut state, &round_keys[0]);

    state_to_block(&state)
}

/// AES-128 over a single 16-byte block, 10 rounds.
pub struct Aes128 {
    round_keys: Vec<[u8; 16]>,
}

impl Aes128 {
    pub fn new() -> Self {
        Aes128 { round_keys: Vec::new() }
    }

    pub fn with_key(key: &[u8]) -> Result<Self, CipherError> {
        let mut cipher = Aes128::new();
        cipher.set_key(key)?;
        Ok(cipher)
    }

    fn check_block(&self, block: &[u8]) -> Result<(), CipherError> {
        if self.round_keys.is_empty() {
            return Err(CipherError::InvalidKeyLength { expected: AES_KEY_SIZE, actual: 0 });
        }
        if block.len() != AES_BLOCK_SIZE {
            return Err(CipherError::InvalidBlockLength {
                expected: AES_BLOCK_SIZE,
                actual: block.len(),
            });
        }
        Ok(())
    }

    fn schedule(&self) -> &[[u8; 16]; ROUND_KEY_COUNT] {
        self.round_keys
            .as_slice()
            .try_into()
            .expect("round keys were derived by set_key")
    }

    /// One-call text interface: `0x`-hex or raw-text block and key.
    pub fn encrypt_text(plain_text: &str, key: &str) -> Result<String, CipherError> {
        let key_bytes = block_text::parse_key(key, AES_KEY_SIZE)?;
        let block = block_text::parse_block(plain_text, AES_BLOCK_SIZE)?;
        let cipher = Aes128::with_key(&key_bytes)?;
        let out = cipher.encrypt_block(&block.bytes)?;
        Ok(block_text::format_block(&out, block.encoding))
    }

    pub fn decrypt_text(cipher_text: &str, key: &str) -> Result<String, CipherError> {
        let key_bytes = block_text::parse_key(key, AES_KEY_SIZE)?;
        let block = block_text::parse_block(cipher_text, AES_BLOCK_SIZE)?;
        let cipher = Aes128::with_key(&key_bytes)?;
        let out = cipher.decrypt_block(&block.bytes)?;
        Ok(block_text::format_block(&out, block.encoding))
    }
}

impl Default for Aes128 {
    fn default() -> Self {
        Aes128::new()
    }
}

impl CipherAlgorithm for Aes128 {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;
        Ok(encrypt_block_internal(block, self.schedule()))
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;
        Ok(decrypt_block_internal(block, self.schedule()))
    }

    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }
}

impl SymmetricCipher for Aes128 {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        let key: &[u8; 16] = key.try_into().map_err(|_| CipherError::InvalidKeyLength {
            expected: AES_KEY_SIZE,
            actual: key.len(),
        })?;
        self.round_keys = expand_key(key).to_vec();
        debug!("derived {} AES round keys", self.round_keys.len());
        Ok(())
    }
}
