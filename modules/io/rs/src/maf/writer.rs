use super::record::Block;
use crate::compression::encode;
use crate::WriteRecord;
use eyre::{ensure, Result};
use std::io::Write;

/// `scoring` value of MAF files produced by Biopython's `MafWriter`.
pub const SCORING_NONE: &str = "none";
/// `scoring` value written by hal2maf.
pub const SCORING_NA: &str = "N/A";

/// MAF writer. The header line is emitted on creation, blocks are separated by blank lines.
#[derive(Debug)]
pub struct Writer<W> {
    writer: W,
}

impl<W: Write> Writer<W> {
    /// Start a MAF file with a `##maf version=1 scoring=<scoring>` header.
    pub fn new(mut writer: W, scoring: &str) -> Result<Self> {
        ensure!(
            !scoring.is_empty() && !scoring.contains(char::is_whitespace),
            "MAF scoring must be a single word, got: {scoring:?}"
        );
        writeln!(writer, "##maf version=1 scoring={scoring}\n")?;
        Ok(Self { writer })
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
    type Record = Block;

    fn write_record(&mut self, block: &Self::Record) -> Result<()> {
        self.writer.write_all(b"a")?;
        for (key, value) in block.annotations() {
            write!(self.writer, " {key}={value}")?;
        }
        self.writer.write_all(b"\n")?;

        for row in block.rows() {
            write!(
                self.writer,
                "s {} {} {} {} {} ",
                row.src(),
                row.start(),
                row.size(),
                row.strand(),
                row.src_size()
            )?;
            self.writer.write_all(row.text())?;
            self.writer.write_all(b"\n")?;
        }
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
