//! Chrom-sizes files: one `name<TAB>length` line per sequence, as produced by `halStats
//! --chromSizes` or UCSC `faSize`.

use crate::compression::decode;
use compara_core_rs::loc::ChromSizes;
use eyre::{ensure, OptionExt, Result, WrapErr};
use std::io::{BufRead, BufReader};
use std::path::Path;

pub fn read(path: impl AsRef<Path>) -> Result<ChromSizes> {
    let path = path.as_ref();
    let stream = decode::infer_from_path(path)?;
    from_reader(BufReader::new(stream))
        .wrap_err_with(|| format!("Failed to read chrom sizes from {}", path.display()))
}

pub fn from_reader(reader: impl BufRead) -> Result<ChromSizes> {
    let mut sizes = ChromSizes::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split('\t');
        let name = parts.next().ok_or_eyre("Missing sequence name")?;
        let length = parts
            .next()
            .ok_or_else(|| eyre::eyre!("Missing sequence length at line {}", ind + 1))?;
        ensure!(
            parts.next().is_none() && !name.is_empty(),
            "Chrom sizes line {} must have exactly two tab-separated fields: {}",
            ind + 1,
            line
        );
        let length = length
            .trim()
            .parse::<u64>()
            .wrap_err_with(|| format!("Invalid sequence length at line {}: {}", ind + 1, length))?;
        sizes.insert(name, length)?;
    }
    Ok(sizes)
}
