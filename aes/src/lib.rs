pub mod gf;
pub mod rijndael;

pub use crate::rijndael::cipher::Aes128;
