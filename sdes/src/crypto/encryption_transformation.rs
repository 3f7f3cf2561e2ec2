use bitvec::prelude::{BitSlice, BitVec};

pub trait EncryptionTransformation {
    fn transform(&self, input_block: &BitSlice, round_key: &BitSlice) -> BitVec;
}
