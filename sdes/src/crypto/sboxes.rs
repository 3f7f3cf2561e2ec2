use bitvec::prelude::{BitSlice, BitVec};

use crate::crypto::sdes_tables::{S_BOX_0, S_BOX_1, SBox};

/// Row is addressed by the outer two bits, column by the inner two.
/// The non-adjacent grouping is deliberate in this cipher.
pub fn s_box_lookup(input: &BitSlice, s_box: &SBox) -> BitVec {
    assert_eq!(input.len(), 4, "S-box input must be 4 bits");

    let row = (input[0] as usize) * 2 + (input[3] as usize);
    let col = (input[1] as usize) * 2 + (input[2] as usize);
    let value = s_box[row][col];

    let mut output = BitVec::with_capacity(2);
    output.push((value >> 1) & 1 != 0);
    output.push(value & 1 != 0);
    output
}

pub fn s0(input: &BitSlice) -> BitVec {
    s_box_lookup(input, &S_BOX_0)
}

pub fn s1(input: &BitSlice) -> BitVec {
    s_box_lookup(input, &S_BOX_1)
}
