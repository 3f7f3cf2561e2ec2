use bitvec::prelude::{BitSlice, BitVec};

use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::sdes::SdesCipher;
use crate::crypto::sdes_tables::{P8, P10};
use crate::crypto::utils::{concat, left_shift, permute};

/// Derive the two 8-bit round keys from a 10-bit master key.
pub fn generate_keys(master_key: &BitSlice) -> (BitVec, BitVec) {
    assert_eq!(master_key.len(), 10, "S-DES master key must be 10 bits");

    // 1) P10: переставляем биты ключа
    let permuted = permute(master_key, &P10);

    // 2) Разбиваем на левую и правую половины по 5 бит
    let left = &permuted[..5];
    let right = &permuted[5..];

    // 3) LS-1: циклический сдвиг обеих половин на 1, затем P8 -> K1
    let left = left_shift(left, 1);
    let right = left_shift(right, 1);
    let k1 = permute(&concat(&left, &right), &P8);

    // 4) LS-2: ещё на 2 позиции от уже сдвинутых половин, затем P8 -> K2.
    // Порядок "сдвиг на 1, потом ещё на 2" сохранён намеренно.
    let left = left_shift(&left, 2);
    let right = left_shift(&right, 2);
    let k2 = permute(&concat(&left, &right), &P8);

    (k1, k2)
}

impl KeyExpansion for SdesCipher {
    fn generate_round_keys(&self, key: &BitSlice) -> Vec<BitVec> {
        let (k1, k2) = generate_keys(key);
        vec![k1, k2]
    }
}
