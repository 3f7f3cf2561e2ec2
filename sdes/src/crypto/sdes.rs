use bitvec::prelude::{BitSlice, BitVec};

use crate::crypto::key_schedule::generate_keys;
use crate::crypto::round_function::round_function;

/// Two-round simplified DES over 8-bit blocks, keyed by a 10-bit master key.
#[derive(Clone)]
pub struct SdesCipher {
    k1: BitVec,
    k2: BitVec,
}

impl SdesCipher {
    /// Create a cipher, deriving K1 and K2 from the master key.
    pub fn new(master_key: &BitSlice) -> Self {
        let (k1, k2) = generate_keys(master_key);
        SdesCipher { k1, k2 }
    }

    /// Encrypt one 8-bit block: round one under K1, round two under K2.
    /// The halves are not swapped between the two rounds; this variant
    /// runs the full round pipeline twice back to back.
    pub fn encrypt(&self, plaintext: &BitSlice) -> BitVec {
        let after_round_one = round_function(plaintext, &self.k1);
        round_function(&after_round_one, &self.k2)
    }

    pub fn set_key(&mut self, master_key: &BitSlice) -> Result<(), &'static str> {
        if master_key.len() != 10 {
            return Err("S-DES master key must be 10 bits");
        }
        let (k1, k2) = generate_keys(master_key);
        self.k1 = k1;
        self.k2 = k2;
        Ok(())
    }

    pub fn round_keys(&self) -> (&BitSlice, &BitSlice) {
        (&self.k1, &self.k2)
    }

    pub fn block_size(&self) -> usize {
        8
    }
}
