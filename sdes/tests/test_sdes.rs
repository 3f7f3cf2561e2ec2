use bitvec::prelude::*;
use sdes::SdesCipher;
use sdes::crypto::encryption_transformation::EncryptionTransformation;
use sdes::crypto::key_expansion::KeyExpansion;
use sdes::crypto::round_function::round_function;
use sdes::crypto::utils::{format_bits, parse_bits};

fn bits(text: &str) -> BitVec {
    parse_bits(text).unwrap()
}

#[test]
fn test_reference_encryption() {
    let cipher = SdesCipher::new(&bits("1010000010"));

    let (k1, k2) = cipher.round_keys();
    assert_eq!(format_bits(k1), "10100100");
    assert_eq!(format_bits(k2), "01000011");

    let ciphertext = cipher.encrypt(&bits("10100101"));
    assert_eq!(format_bits(&ciphertext), "00100101");
}

#[test]
fn test_second_reference_vector() {
    let cipher = SdesCipher::new(&bits("1110001110"));
    let ciphertext = cipher.encrypt(&bits("10100101"));
    assert_eq!(format_bits(&ciphertext), "00100001");
}

#[test]
fn test_third_reference_vector() {
    let cipher = SdesCipher::new(&bits("1100110011"));
    let ciphertext = cipher.encrypt(&bits("10101010"));
    assert_eq!(format_bits(&ciphertext), "10001110");
}

#[test]
fn test_encrypt_is_two_rounds_without_a_swap() {
    let cipher = SdesCipher::new(&bits("1010000010"));
    let (k1, k2) = cipher.round_keys();

    let after_round_one = round_function(&bits("10100101"), k1);
    assert_eq!(format_bits(&after_round_one), "10100001");
    assert_eq!(
        cipher.encrypt(&bits("10100101")),
        round_function(&after_round_one, k2)
    );
}

#[test]
fn test_block_size() {
    let cipher = SdesCipher::new(&bits("1010000010"));
    assert_eq!(cipher.block_size(), 8);
}

#[test]
fn test_set_key_rejects_wrong_length() {
    let mut cipher = SdesCipher::new(&bits("1010000010"));
    assert!(cipher.set_key(&bits("101")).is_err());
    assert!(cipher.set_key(&bits("10100000101")).is_err());
    assert!(cipher.set_key(&bits("1110001110")).is_ok());
}

#[test]
fn test_set_key_rederives_round_keys() {
    let mut cipher = SdesCipher::new(&bits("1010000010"));
    cipher.set_key(&bits("1110001110")).unwrap();

    let (k1, k2) = cipher.round_keys();
    assert_eq!(format_bits(k1), "11101100");
    assert_eq!(format_bits(k2), "11000111");
}

#[test]
fn test_different_keys_produce_different_ciphertexts() {
    let c1 = SdesCipher::new(&bits("1010000010"));
    let c2 = SdesCipher::new(&bits("1110001110"));
    let plaintext = bits("10100101");
    assert_ne!(c1.encrypt(&plaintext), c2.encrypt(&plaintext));
}

#[test]
fn test_key_expansion_trait_yields_both_round_keys() {
    let cipher = SdesCipher::new(&bits("1010000010"));
    let round_keys = cipher.generate_round_keys(&bits("1010000010"));
    assert_eq!(round_keys.len(), 2);
    assert_eq!(format_bits(&round_keys[0]), "10100100");
    assert_eq!(format_bits(&round_keys[1]), "01000011");
}

#[test]
fn test_transformation_trait_matches_round_function() {
    let cipher = SdesCipher::new(&bits("1010000010"));
    let block = bits("10100101");
    let key = bits("10100100");
    assert_eq!(cipher.transform(&block, &key), round_function(&block, &key));
}
