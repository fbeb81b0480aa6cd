//! Demonstrates encoding a message and decoding it back, padding included.

use playfair_core::PlayfairCipher;

fn main() {
    let mut cipher = PlayfairCipher::new();
    cipher.set_keyword("keyword");
    println!("keyword: {}", cipher.keyword());
    println!("{}", cipher.grid());

    // "ss" lands in one digraph and is split by the padding letter.
    let message = "othisisasecretmessage";
    let encoded = cipher.encode(message).expect("message uses table letters only");
    let decoded = cipher.decode(&encoded).expect("encoded text has even length");

    assert_eq!(encoded, "kzijpjncmordkuudpzncmd");
    assert_eq!(decoded, "othisisasecretmesxsage");

    println!("plaintext:  {message}");
    println!("ciphertext: {encoded}");
    println!("decoded:    {decoded}");
}
