use std::path::Path;

use sdes::SdesCipher;
use sdes::crypto::cipher_io::{read_input, read_permutations};
use sdes::crypto::sdes_tables::{EP, IP, IP_INVERSE, P4, P8, P10};
use sdes::crypto::utils::{format_bits, parse_bits};

fn main() -> std::io::Result<()> {
    let files_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("examples")
        .join("files");

    // Loaded tables are informational; the cipher runs on the built-in
    // constants, so flag any drift in the configuration file.
    let permutations = read_permutations(files_dir.join("permutations.txt"))?;
    let built_in: [(&str, &[usize]); 6] = [
        ("P10", &P10),
        ("P8", &P8),
        ("IP", &IP),
        ("EP", &EP),
        ("P4", &P4),
        ("IP-1", &IP_INVERSE),
    ];
    for (name, table) in built_in {
        match permutations.get(name) {
            Some(loaded) if loaded.as_slice() == table => {}
            Some(_) => println!("warning: {} in permutations.txt differs from the built-in table", name),
            None => println!("warning: {} is missing from permutations.txt", name),
        }
    }

    let (key_text, plaintext_text) = read_input(files_dir.join("input.txt"))?;
    let key = parse_bits(&key_text).expect("key must be a string of '0' and '1'");
    let plaintext = parse_bits(&plaintext_text).expect("plaintext must be a string of '0' and '1'");

    let cipher = SdesCipher::new(&key);
    let (k1, k2) = cipher.round_keys();
    println!("K1: {}", format_bits(k1));
    println!("K2: {}", format_bits(k2));

    let ciphertext = cipher.encrypt(&plaintext);
    println!("Ciphertext: {}", format_bits(&ciphertext));

    Ok(())
}
