use super::record::{Block, Row};
use crate::compression::decode;
use crate::traits::ReadRecord;
use compara_core_rs::loc::Strand;
use eyre::{bail, ensure, OptionExt, Result, WrapErr};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub mod parse {
    use super::*;

    pub fn annotations(line: &str) -> Result<Vec<(String, String)>> {
        let mut parts = line.split_ascii_whitespace();
        ensure!(parts.next() == Some("a"), "MAF block must start with an 'a' line");
        parts
            .map(|x| {
                let (key, value) = x
                    .split_once('=')
                    .ok_or_eyre("MAF block annotations must be key=value pairs")?;
                Ok((key.to_owned(), value.to_owned()))
            })
            .collect()
    }

    pub fn row(line: &str) -> Result<Row> {
        let fields: Vec<&str> = line.split_ascii_whitespace().collect();
        ensure!(
            fields.len() == 7 && fields[0] == "s",
            "MAF 's' line must have exactly 7 fields, got {}",
            fields.len()
        );

        let number = |name: &str, value: &str| {
            value
                .parse::<u64>()
                .wrap_err_with(|| format!("Invalid MAF {name}: {value}"))
        };
        let strand = match fields[4] {
            "+" => Strand::Forward,
            "-" => Strand::Reverse,
            other => bail!("Invalid MAF strand: {other}"),
        };

        Row::new(
            fields[1].to_owned(),
            number("start", fields[2])?,
            number("size", fields[3])?,
            strand,
            number("srcSize", fields[5])?,
            fields[6].as_bytes().to_vec(),
        )
    }
}

/// Streaming MAF reader returning one alignment block at a time.
pub struct Reader<R> {
    reader: R,
    buffer: String,
    line: usize,
    // The buffer holds the 'a' line of the next block
    pending: bool,
}

impl<R: BufRead> Reader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            line: 0,
            pending: false,
        }
    }
}

impl Reader<()> {
    /// Open a MAF file, decompressing it if needed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Reader<BufReader<decode::Stream<File>>>> {
        Ok(Reader::new(BufReader::new(decode::infer_from_path(path)?)))
    }
}

impl<R: BufRead> ReadRecord for Reader<R> {
    type Record = Block;

    fn read_record(&mut self, into: &mut Block) -> Result<bool> {
        let mut annotations = None;
        let mut rows = Vec::new();
        let mut first_line = 0;

        loop {
            if !self.pending {
                self.buffer.clear();
                if self.reader.read_line(&mut self.buffer)? == 0 {
                    break;
                }
                self.line += 1;
            }
            self.pending = false;

            let line = self.buffer.trim_end_matches(['\n', '\r']);
            let kind = line.bytes().next();
            if annotations.is_none() {
                match kind {
                    None | Some(b'#') => continue,
                    Some(b'a') => {
                        annotations = Some(parse::annotations(line).wrap_err_with(|| {
                            format!("Failed to parse MAF line {}: {}", self.line, line)
                        })?);
                        first_line = self.line;
                    }
                    _ => bail!(
                        "Expected a MAF 'a' line at line {}, got: {}",
                        self.line,
                        line
                    ),
                }
                continue;
            }

            match kind {
                None => break,
                Some(b'a') => {
                    self.pending = true;
                    break;
                }
                Some(b's') => rows.push(parse::row(line).wrap_err_with(|| {
                    format!("Failed to parse MAF line {}: {}", self.line, line)
                })?),
                Some(b'i' | b'e' | b'q' | b'#') => {
                    log::trace!("Skipping MAF line {}", self.line);
                    continue;
                }
                _ => bail!("Unexpected MAF line {}: {}", self.line, line),
            }
        }

        match annotations {
            None => Ok(false),
            Some(annotations) => {
                *into = Block::new(annotations, rows)
                    .wrap_err_with(|| format!("Invalid MAF block at line {first_line}"))?;
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const MAF: &str = "\
##maf version=1 scoring=N/A
# hal2maf output

a score=0.000000
s hg38.chr1 10 5 + 100 AC-GTA
s mm10.chr2 0 4 - 50 A--GTA
i mm10.chr2 N 0 C 0

a
s hg38.chr1 20 3 + 100 ACG
a score=1.5 pass=2
s hg38.chr1 30 2 + 100 A-C
q hg38.chr1 9-9
";

    #[test]
    fn test_read_blocks() -> Result<()> {
        let mut reader = Reader::new(Cursor::new(MAF));
        let mut blocks = Vec::new();
        assert_eq!(reader.read_to_end(&mut blocks)?, 3);

        assert_eq!(
            blocks[0].annotations(),
            &vec![("score".to_string(), "0.000000".to_string())]
        );
        assert_eq!(blocks[0].rows().len(), 2);
        assert_eq!(blocks[0].columns(), 6);
        let row = &blocks[0].rows()[1];
        assert_eq!(row.src(), "mm10.chr2");
        assert_eq!((*row.start(), *row.size(), *row.src_size()), (0, 4, 50));
        assert_eq!(*row.strand(), Strand::Reverse);
        assert_eq!(row.text(), b"A--GTA");

        assert!(blocks[1].annotations().is_empty());
        assert_eq!(blocks[1].rows().len(), 1);

        assert_eq!(blocks[2].annotations().len(), 2);
        assert_eq!(blocks[2].rows()[0].text(), b"A-C");

        let mut block = Block::default();
        assert!(!reader.read_record(&mut block)?);
        Ok(())
    }

    #[test]
    fn test_empty_maf() -> Result<()> {
        for content in ["", "##maf version=1\n", "\n\n# comment\n"] {
            let mut blocks = Vec::new();
            assert_eq!(Reader::new(Cursor::new(content)).read_to_end(&mut blocks)?, 0);
        }
        Ok(())
    }

    #[test]
    fn test_invalid_maf() {
        for content in [
            // Rows outside of a block
            "s hg38.chr1 10 5 + 100 ACGTA\n",
            // Blocks without rows
            "a score=0\n\n",
            // Malformed rows
            "a\ns hg38.chr1 10 5 + 100\n",
            "a\ns hg38.chr1 10 5 * 100 ACGTA\n",
            "a\ns hg38.chr1 ten 5 + 100 ACGTA\n",
            "a\ns hg38.chr1 10 4 + 100 ACGTA\n",
            "a\ns hg38.chr1 98 5 + 100 ACGTA\n",
            "a\ns hg38.chr1 18446744073709551615 1 + 10 A\n",
            "a\ns hg38.chr1 10 5 + 100 ACGTA\ns mm10.chr1 10 2 + 100 AC\n",
            // Malformed annotations
            "a score\ns hg38.chr1 10 5 + 100 ACGTA\n",
            // Unknown lines inside a block
            "a\ns hg38.chr1 10 5 + 100 ACGTA\nx unknown\n",
        ] {
            let result = Reader::new(Cursor::new(content)).read_to_end(&mut Vec::new());
            assert!(result.is_err(), "Content: {:?}", content);
        }
    }

    #[test]
    fn test_error_reports_line() {
        let content = "##maf version=1\n\na\ns hg38.chr1 10 5 + 100 ACGTA\n\na\ns hg38.chr1 1 1 + 1 AA\n";
        let result = Reader::new(Cursor::new(content)).read_to_end(&mut Vec::new());
        let error = format!("{:?}", result.err());
        assert!(error.contains("line 7"), "{error}");
    }
}
