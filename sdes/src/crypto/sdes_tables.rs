//! Fixed permutation tables and S-boxes of the simplified DES variant.

pub type SBox = [[u8; 4]; 4];

/// P10 permutation applied to the master key.
pub const P10: [usize; 10] = [3, 5, 2, 7, 4, 10, 1, 9, 8, 6];

/// P8 permutation compressing the shifted key halves into a round key.
pub const P8: [usize; 8] = [6, 3, 7, 4, 8, 5, 10, 9];

/// Initial permutation of the data block.
pub const IP: [usize; 8] = [2, 6, 3, 1, 4, 8, 5, 7];

/// Expansion permutation, 4-bit half into 8 bits with repetition.
pub const EP: [usize; 8] = [4, 1, 2, 3, 2, 3, 4, 1];

/// P4 permutation of the S-box output.
pub const P4: [usize; 4] = [2, 4, 3, 1];

/// Final permutation, the exact inverse of IP.
pub const IP_INVERSE: [usize; 8] = [4, 1, 3, 5, 7, 2, 8, 6];

pub const S_BOX_0: SBox = [
    [1, 0, 3, 2],
    [3, 2, 1, 0],
    [0, 2, 1, 3],
    [3, 1, 3, 2],
];

pub const S_BOX_1: SBox = [
    [0, 1, 2, 3],
    [2, 0, 1, 3],
    [3, 0, 1, 0],
    [2, 1, 0, 3],
];
