use symmetric_cipher::crypto::des::Des;
use symmetric_cipher::crypto::triple_des::TripleDes;

fn main() {
    let key = "0x133457799BBCDFF1";
    let plaintext = "0x0123456789ABCDEF";

    let ciphertext = Des::encrypt_text(plaintext, key).expect("valid block and key");
    println!("DES  {plaintext} -> {ciphertext}");

    let second_key = "0x0E329232EA6D0D73";
    let triple = TripleDes::encrypt_text(plaintext, (key, second_key)).expect("valid block and keys");
    println!("3DES {plaintext} -> {triple}");

    let recovered = TripleDes::decrypt_text(&triple, (key, second_key)).expect("valid block and keys");
    println!("back {triple} -> {recovered}");
}
