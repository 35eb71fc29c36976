use super::record::Record;
use crate::compression::encode;
use crate::traits::WriteRecord;
use eyre::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::Path;

#[derive(Debug)]
pub struct Writer<W> {
    writer: W,
    line_width: NonZeroUsize,
}

pub const DEFAULT_LINE_WIDTH: NonZeroUsize = NonZeroUsize::new(60).unwrap();

impl Writer<()> {
    pub fn from_path(
        path: impl AsRef<Path>,
        line_width: NonZeroUsize,
    ) -> Result<Writer<encode::Stream<BufWriter<File>>>> {
        Ok(Writer::new(encode::infer_from_path(path)?, line_width))
    }
}

impl<W: Write> Writer<W> {
    pub fn new(writer: W, line_width: NonZeroUsize) -> Self {
        Self { writer, line_width }
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
    type Record = Record;

    fn write_record(&mut self, record: &Self::Record) -> Result<()> {
        self.writer.write_all(b">")?;
        self.writer.write_all(record.id().as_bytes())?;
        self.writer.write_all(b"\n")?;

        record
            .seq()
            .chunks(self.line_width.get())
            .try_for_each(|c| -> Result<()> {
                self.writer.write_all(c)?;
                self.writer.write_all(b"\n")?;
                Ok(())
            })
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fasta::Reader;
    use crate::ReadRecord;
    use std::io::Cursor;

    #[test]
    fn test_fasta_writer_wraps_lines() -> Result<()> {
        let records: Vec<Record> = vec![
            ("hg38:chr1:1:12", "ACGTACGT--AC").try_into()?,
            ("mm10:chr2:3:4", "A-C").try_into()?,
        ];

        let mut writer = Writer::new(Vec::new(), NonZeroUsize::new(5).unwrap());
        writer.write_records(&records)?;
        let produced = String::from_utf8(writer.into_inner()?)?;
        assert_eq!(
            produced,
            ">hg38:chr1:1:12\nACGTA\nCGT--\nAC\n>mm10:chr2:3:4\nA-C\n"
        );

        let mut parsed = Vec::new();
        Reader::new(Cursor::new(produced)).read_to_end(&mut parsed)?;
        assert_eq!(parsed, records);
        Ok(())
    }
}
