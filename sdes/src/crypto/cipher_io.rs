use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read named permutation tables from a text file with lines of the
/// form `NAME: n1 n2 ...`. Positions stay 1-based, as `permute` expects.
pub fn read_permutations(path: impl AsRef<Path>) -> io::Result<HashMap<String, Vec<usize>>> {
    let file = File::open(path)?;
    let mut permutations = HashMap::new();

    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (name, values) = line
            .split_once(':')
            .ok_or_else(|| invalid_data("permutation line must look like 'NAME: n1 n2 ...'"))?;

        let mut table = Vec::new();
        for token in values.split_whitespace() {
            let position = token
                .parse::<usize>()
                .map_err(|_| invalid_data("permutation entry is not a number"))?;
            table.push(position);
        }
        permutations.insert(name.trim().to_string(), table);
    }

    Ok(permutations)
}

/// Read the master key and plaintext strings from a text file with
/// `Key:` and `Plaintext:` lines. Both lines must be present.
pub fn read_input(path: impl AsRef<Path>) -> io::Result<(String, String)> {
    let file = File::open(path)?;
    let mut key = None;
    let mut plaintext = None;

    for line in BufReader::new(file).lines() {
        let line = line?;
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        match name.trim() {
            "Key" => key = Some(value.trim().to_string()),
            "Plaintext" => plaintext = Some(value.trim().to_string()),
            _ => {}
        }
    }

    let key = key.ok_or_else(|| invalid_data("input file is missing a 'Key:' line"))?;
    let plaintext =
        plaintext.ok_or_else(|| invalid_data("input file is missing a 'Plaintext:' line"))?;
    Ok((key, plaintext))
}

fn invalid_data(message: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}
