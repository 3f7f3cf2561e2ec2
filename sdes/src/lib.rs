pub mod crypto;

pub use crypto::sdes::SdesCipher;
