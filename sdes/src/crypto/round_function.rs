use bitvec::prelude::{BitSlice, BitVec};

use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::sboxes::s_box_lookup;
use crate::crypto::sdes::SdesCipher;
use crate::crypto::sdes_tables::{EP, IP, IP_INVERSE, P4, S_BOX_0, S_BOX_1};
use crate::crypto::utils::{concat, permute, xor};

/// One full round over an 8-bit block under an 8-bit round key.
pub fn round_function(block: &BitSlice, round_key: &BitSlice) -> BitVec {
    assert_eq!(block.len(), 8, "S-DES block must be 8 bits");
    assert_eq!(round_key.len(), 8, "S-DES round key must be 8 bits");

    // 1. Initial permutation
    let permuted = permute(block, &IP);
    let left = &permuted[..4];
    let right = &permuted[4..];

    // 2. Expansion of the right half, 4 bits -> 8
    let expanded = permute(right, &EP);

    // 3. Key mixing
    let mixed = xor(&expanded, round_key);

    // 4. S-boxes, each 4-bit half -> 2 bits
    let substituted = concat(
        &s_box_lookup(&mixed[..4], &S_BOX_0),
        &s_box_lookup(&mixed[4..], &S_BOX_1),
    );

    // 5. P4, then mix into the left half
    let new_left = xor(&permute(&substituted, &P4), left);

    // 6. Final permutation over the new left half and the untouched right half
    permute(&concat(&new_left, right), &IP_INVERSE)
}

impl EncryptionTransformation for SdesCipher {
    fn transform(&self, input_block: &BitSlice, round_key: &BitSlice) -> BitVec {
        round_function(input_block, round_key)
    }
}
