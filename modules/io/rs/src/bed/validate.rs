use eyre::{ensure, Result};

pub fn seqid(s: &str) -> Result<()> {
    ensure!(!s.is_empty(), "BED seqid can't be empty");
    ensure!(
        s.len() <= 255,
        "BED seqid can't be longer than 255 characters"
    );
    ensure!(
        s.chars().all(|c| c.is_ascii_graphic()),
        "BED seqid can only contain non-whitespace ASCII characters, got: {}",
        s
    );
    Ok(())
}

pub fn name(s: &str) -> Result<()> {
    ensure!(!s.is_empty(), "BED name can't be empty");
    ensure!(
        s.len() <= 255,
        "BED name can't be longer than 255 characters"
    );
    ensure!(
        s.chars().all(|c| matches!(c, '\x20'..='\x7e')),
        "BED name can only contain printable ASCII characters"
    );
    Ok(())
}

pub fn score(score: &u16) -> Result<()> {
    ensure!(*score <= 1000, "BED score must be between 0 and 1000");
    Ok(())
}
