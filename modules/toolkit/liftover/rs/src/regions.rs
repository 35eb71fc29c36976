//! Source regions given as a tab-separated table with the columns `chr`, `start`, `end`,
//! `strand` and, optionally, `name`. Coordinates are 1-based closed, strands are `1`/`-1`.

use compara_core_rs::loc::Region;
use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Row {
    chr: String,
    start: String,
    end: String,
    strand: String,
    #[serde(default)]
    name: Option<String>,
}

pub fn read_tsv(path: impl AsRef<Path>) -> Result<Vec<Region>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .wrap_err_with(|| format!("Failed to open region file {}", path.display()))?;
    from_reader(file).wrap_err_with(|| format!("Failed to read regions from {}", path.display()))
}

pub fn from_reader(reader: impl Read) -> Result<Vec<Region>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .has_headers(true)
        .from_reader(reader);

    let mut regions = Vec::new();
    for (ind, row) in reader.deserialize::<Row>().enumerate() {
        // Line 1 is the header
        let row = row.wrap_err_with(|| format!("Malformed region at line {}", ind + 2))?;
        let region = Region::parse_1_based_attribs(&row.chr, &row.start, &row.end, &row.strand)
            .wrap_err_with(|| format!("Invalid region at line {}", ind + 2))?;
        regions.push(region.with_name(row.name));
    }
    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use compara_core_rs::loc::Strand;

    #[test]
    fn test_read_regions() -> Result<()> {
        let content = "chr\tstart\tend\tstrand\tname\nchr1\t16\t18\t1\tINS\nchr2\t1\t5\t-1\t\n";
        let regions = from_reader(content.as_bytes())?;
        assert_eq!(
            regions,
            vec![
                Region::new("chr1", 15, 18, Strand::Forward)?.with_name(Some("INS".into())),
                Region::new("chr2", 0, 5, Strand::Reverse)?,
            ]
        );
        Ok(())
    }

    #[test]
    fn test_name_column_is_optional() -> Result<()> {
        let content = "strand\tchr\tstart\tend\n1\tchr1\t16\t18\n";
        let regions = from_reader(content.as_bytes())?;
        assert_eq!(regions, vec![Region::new("chr1", 15, 18, Strand::Forward)?]);
        Ok(())
    }

    #[test]
    fn test_invalid_regions() {
        for content in [
            "chr\tstart\tend\tstrand\nchr1\t0\t18\t1\n",
            "chr\tstart\tend\tstrand\nchr1\t20\t18\t1\n",
            "chr\tstart\tend\tstrand\nchr1\t16\t18\t+\n",
            "chr\tstart\tend\nchr1\t16\t18\n",
        ] {
            assert!(from_reader(content.as_bytes()).is_err(), "{content}");
        }
    }
}
