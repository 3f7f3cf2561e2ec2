use bitvec::prelude::{BitSlice, BitVec};

/// Переставляет биты по таблице с 1-индексацией: output[i] = input[table[i] - 1].
/// Длина результата равна длине таблицы, поэтому одна и та же функция
/// работает и для сжимающих, и для расширяющих перестановок.
pub fn permute(input: &BitSlice, table: &[usize]) -> BitVec {
    let mut output = BitVec::with_capacity(table.len());
    for &position in table {
        assert!(
            position >= 1 && position <= input.len(),
            "permutation table position {} out of range for {}-bit input",
            position,
            input.len()
        );
        output.push(input[position - 1]);
    }
    output
}

/// Циклический сдвиг влево: output[i] = input[(i + shift) % len].
pub fn left_shift(input: &BitSlice, shift: usize) -> BitVec {
    let length = input.len();
    let mut output = BitVec::with_capacity(length);
    for i in 0..length {
        output.push(input[(i + shift) % length]);
    }
    output
}

pub fn xor(a: &BitSlice, b: &BitSlice) -> BitVec {
    assert_eq!(a.len(), b.len(), "xor operands must have equal lengths");
    a.iter()
        .by_vals()
        .zip(b.iter().by_vals())
        .map(|(x, y)| x ^ y)
        .collect()
}

pub fn concat(left: &BitSlice, right: &BitSlice) -> BitVec {
    let mut combined = BitVec::with_capacity(left.len() + right.len());
    combined.extend(left.iter().by_vals());
    combined.extend(right.iter().by_vals());
    combined
}

/// Parse a string of '0'/'1' characters into bits. Anything else is a
/// boundary error, never silently truncated.
pub fn parse_bits(text: &str) -> Result<BitVec, &'static str> {
    let mut bits = BitVec::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '0' => bits.push(false),
            '1' => bits.push(true),
            _ => return Err("bit string must contain only '0' and '1'"),
        }
    }
    Ok(bits)
}

pub fn format_bits(bits: &BitSlice) -> String {
    bits.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}
