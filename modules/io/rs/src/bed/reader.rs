use super::record::Bed6;
use crate::compression::decode;
use crate::traits::ReadRecord;
use compara_core_rs::loc::{Interval, Strand};
use eyre::{bail, OptionExt, Result, WrapErr};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub mod parse {
    use super::*;

    pub fn seqid<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<String> {
        let seqid = parts.next().ok_or_eyre("Missing BED seqid")?;
        Ok(seqid.to_owned())
    }

    pub fn interval<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<Interval<u64>> {
        let start = parts.next().ok_or_eyre("Missing BED start")?;
        let end = parts.next().ok_or_eyre("Missing BED end")?;

        let (start, end) = match (start.parse::<u64>(), end.parse::<u64>()) {
            (Ok(start), Ok(end)) => (start, end),
            _ => bail!("Invalid BED interval"),
        };
        let interval = Interval::new(start, end).wrap_err("Invalid BED interval")?;
        Ok(interval)
    }

    pub fn name<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<String> {
        let name = parts.next().ok_or_eyre("Missing BED name")?;
        Ok(name.to_owned())
    }

    pub fn score<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<u16> {
        let score = parts.next().ok_or_eyre("Missing BED score")?;
        let score = score.parse::<u16>().wrap_err("Invalid BED score")?;
        Ok(score)
    }

    pub fn strand<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<Option<Strand>> {
        let strand = parts.next().ok_or_eyre("Missing BED strand")?;
        let strand = match strand {
            "+" => Some(Strand::Forward),
            "-" => Some(Strand::Reverse),
            "." => None,
            _ => bail!("Invalid BED strand"),
        };
        Ok(strand)
    }

    pub fn bed6<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<Bed6> {
        Bed6::new(
            seqid(parts)?,
            interval(parts)?,
            name(parts)?,
            score(parts)?,
            strand(parts)?,
        )
    }
}

/// Line-based BED6 reader. Empty lines and `#`, `track` or `browser` header lines are skipped,
/// columns after the sixth are ignored.
pub struct Reader<R> {
    reader: R,
    buffer: String,
    line: usize,
}

impl<R> Reader<R> {
    pub fn new(reader: R) -> Result<Self> {
        Ok(Self {
            reader,
            buffer: String::new(),
            line: 0,
        })
    }
}

impl Reader<()> {
    /// Create a new BED reader from the given file path.
    /// The compression is automatically detected based on the file extension and the internal file signature.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Reader<BufReader<decode::Stream<File>>>> {
        Reader::new(BufReader::new(decode::infer_from_path(path)?))
    }
}

impl<R: BufRead> ReadRecord for Reader<R> {
    type Record = Bed6;

    fn read_record(&mut self, into: &mut Bed6) -> Result<bool> {
        loop {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(false);
            }
            self.line += 1;

            let line = self.buffer.trim_end_matches(['\n', '\r']);
            if line.is_empty()
                || line.starts_with('#')
                || line.starts_with("track")
                || line.starts_with("browser")
            {
                continue;
            }

            *into = parse::bed6(&mut line.split('\t'))
                .wrap_err_with(|| format!("Failed to parse BED record at line {}: {}", self.line, line))?;
            return Ok(true);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use compara_core_rs::loc::Region;
    use std::io::{Cursor, Write};

    #[test]
    fn test_empty_bed() -> Result<()> {
        let mut reader = Reader::new(Cursor::new(""))?;
        let mut records = Vec::new();
        assert_eq!(reader.read_to_end(&mut records)?, 0);
        assert!(records.is_empty());
        Ok(())
    }

    #[test]
    fn test_valid_bed_parsing() -> Result<()> {
        let content = "\
track name=liftover
chr1\t14\t19\t.\t0\t+
# comment

chrX\t0\t100\t1\t5\t-\textra\tcolumns
chrY\t5\t6\tname with spaces\t1000\t.\r
";
        let mut reader = Reader::new(Cursor::new(content))?;
        let mut records = Vec::new();
        assert_eq!(reader.read_to_end(&mut records)?, 3);
        assert_eq!(
            records,
            vec![
                Bed6::new("chr1".into(), Interval::new(14, 19)?, ".".into(), 0, Some(Strand::Forward))?,
                Bed6::new("chrX".into(), Interval::new(0, 100)?, "1".into(), 5, Some(Strand::Reverse))?,
                Bed6::new("chrY".into(), Interval::new(5, 6)?, "name with spaces".into(), 1000, None)?,
            ]
        );
        Ok(())
    }

    #[test]
    fn test_invalid_bed() {
        for content in [
            "chr1\t14\n",
            "chr1\t14\t19\t.\t0\n",
            "chr1\t19\t14\t.\t0\t+\n",
            "chr1\t-1\t14\t.\t0\t+\n",
            "chr1\t1\t14\t.\tscore\t+\n",
            "chr1\t1\t14\t.\t0\t*\n",
            "chr1 1 14 . 0 +\n",
        ] {
            let result = Reader::new(Cursor::new(content)).and_then(|mut x| {
                let mut records = Vec::new();
                x.read_to_end(&mut records)
            });
            assert!(result.is_err(), "Content: {:?}", content);
        }
    }

    #[test]
    fn test_bed_from_gzipped_path() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("regions.bed.gz");

        let mut stream = crate::compression::encode::infer_from_path(&path)?;
        stream.write_all(b"chr1\t15\t18\t.\t0\t-\n")?;
        stream.finish()?;

        let mut records = Vec::new();
        Reader::from_path(&path)?.read_to_end(&mut records)?;
        let regions = records
            .into_iter()
            .map(Region::try_from)
            .collect::<Result<Vec<_>>>()?;
        assert_eq!(regions, vec![Region::new("chr1", 15, 18, Strand::Reverse)?]);
        Ok(())
    }
}
