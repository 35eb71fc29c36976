use eyre::{ensure, Result};

pub fn id(id: &str) -> Result<()> {
    ensure!(!id.is_empty(), "FASTA ID cannot be empty");
    ensure!(
        !id.contains(&['\n', '\r'] as &[char]),
        "Newline characters are not allowed in the FASTA ID: {id}"
    );
    Ok(())
}

/// Sequences may be aligned, so gaps (`-`), stop codons (`*`) and MAF-style unknown bases (`.`)
/// are allowed alongside letters.
pub fn seq(seq: &[u8]) -> Result<()> {
    ensure!(!seq.is_empty(), "FASTA sequence cannot be empty");
    for (i, &x) in seq.iter().enumerate() {
        ensure!(
            x.is_ascii_alphabetic() || matches!(x, b'-' | b'*' | b'.'),
            "Invalid sequence character at index {i} = {:?}",
            x as char
        );
    }
    Ok(())
}
