use super::record::Bed6;
use crate::compression::encode;
use crate::WriteRecord;
use compara_core_rs::loc::IntervalOp;
use eyre::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug)]
pub struct Writer<W> {
    writer: W,
}

impl Writer<()> {
    /// Create a BED file, compressed according to its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Writer<encode::Stream<BufWriter<File>>>> {
        Ok(Writer::new(encode::infer_from_path(path)?))
    }
}

impl<W: Write> Writer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flush the output and return the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> Writer<encode::Stream<W>> {
    pub fn finish(self) -> Result<W> {
        self.into_inner()?.finish()
    }
}

impl<W: Write> WriteRecord for Writer<W> {
    type Record = Bed6;

    fn write_record(&mut self, record: &Self::Record) -> Result<()> {
        let strand = match record.strand() {
            Some(strand) => strand.symbol(),
            None => '.',
        };
        writeln!(
            self.writer,
            "{}\t{}\t{}\t{}\t{}\t{}",
            record.seqid(),
            record.interval().start(),
            record.interval().end(),
            record.name(),
            record.score(),
            strand
        )?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bed::Reader;
    use crate::ReadRecord;
    use std::io::Cursor;

    #[test]
    fn test_bed6_writer_preserves_content() -> Result<()> {
        let expected = "chr1\t14\t19\t.\t0\t+\nchr2\t0\t7\t3\t0\t-\nchrM\t10\t20\tx\t1000\t.\n";

        let mut records = Vec::new();
        Reader::new(Cursor::new(expected))?.read_to_end(&mut records)?;

        let mut writer = Writer::new(Vec::new());
        writer.write_records(&records)?;
        let produced = writer.into_inner()?;

        assert_eq!(String::from_utf8(produced)?, expected);
        Ok(())
    }
}
