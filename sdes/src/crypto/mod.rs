pub mod cipher_io;
pub mod encryption_transformation;
pub mod key_expansion;
pub mod key_schedule;
pub mod round_function;
pub mod sboxes;
pub mod sdes;
pub mod sdes_tables;
pub mod utils;

use bitvec::prelude::{BitSlice, BitVec};
use std::sync::Arc;

use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::key_expansion::KeyExpansion;

impl KeyExpansion for Arc<dyn KeyExpansion> {
    fn generate_round_keys(&self, key: &BitSlice) -> Vec<BitVec> {
        (**self).generate_round_keys(key)
    }
}

impl EncryptionTransformation for Arc<dyn EncryptionTransformation> {
    fn transform(&self, input_block: &BitSlice, round_key: &BitSlice) -> BitVec {
        (**self).transform(input_block, round_key)
    }
}
