use eyre::{ensure, Result, WrapErr};
use std::io::BufRead;
use std::path::Path;

/// Genome names listed one per line. Trailing whitespace and blank lines are ignored.
pub fn read_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .wrap_err_with(|| format!("Failed to open genome list {}", path.display()))?;
    from_reader(std::io::BufReader::new(file))
        .wrap_err_with(|| format!("Failed to read genome list {}", path.display()))
}

pub fn from_reader(reader: impl BufRead) -> Result<Vec<String>> {
    let mut genomes = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let name = line.trim_end();
        if name.is_empty() {
            continue;
        }
        ensure!(
            !genomes.iter().any(|x| x == name),
            "Duplicate genome name: {name}"
        );
        genomes.push(name.to_owned());
    }
    Ok(genomes)
}
