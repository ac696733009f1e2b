use rijndael::Aes128;

fn main() {
    let key = "0x000102030405060708090a0b0c0d0e0f";
    let plaintext = "0x00112233445566778899aabbccddeeff";

    let ciphertext = Aes128::encrypt_text(plaintext, key).expect("valid block and key");
    println!("plaintext:  {plaintext}");
    println!("ciphertext: {ciphertext}");

    let recovered = Aes128::decrypt_text(&ciphertext, key).expect("valid block and key");
    println!("recovered:  {recovered}");
}
