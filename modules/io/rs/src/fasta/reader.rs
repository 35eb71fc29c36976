use super::{record::Record, validate};
use crate::compression::decode;
use crate::traits::ReadRecord;
use eyre::{bail, ensure, Result, WrapErr};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Line-oriented FASTA reader.
///
/// Sequence lines of a record are concatenated, empty lines and trailing `\r` are dropped.
/// Text before the first header, records without a sequence and invalid sequence letters are
/// errors.
pub struct Reader<R> {
    reader: R,
    line: String,
    lineno: usize,
    // Header of the next record, already consumed from the reader
    header: Option<String>,
}

impl Reader<()> {
    /// Open a FASTA file, decompressing it according to its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Reader<BufReader<decode::Stream<File>>>> {
        let path = path.as_ref();
        let stream = decode::infer_from_path(path)
            .wrap_err_with(|| format!("Failed to open FASTA file {}", path.display()))?;
        Ok(Reader::new(BufReader::new(stream)))
    }
}

impl<R: BufRead> Reader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            lineno: 0,
            header: None,
        }
    }

    // Returns false at EOF
    fn next_line(&mut self) -> Result<bool> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(false);
        }
        self.lineno += 1;
        let trimmed = self.line.trim_end_matches(['\n', '\r']).len();
        self.line.truncate(trimmed);
        Ok(true)
    }

    fn next_header(&mut self) -> Result<Option<String>> {
        if let Some(header) = self.header.take() {
            return Ok(Some(header));
        }
        while self.next_line()? {
            match self.line.strip_prefix('>') {
                Some(id) => return Ok(Some(id.to_owned())),
                None if self.line.is_empty() => continue,
                None => bail!(
                    "Expected a FASTA header at line {}, got: {}",
                    self.lineno,
                    self.line
                ),
            }
        }
        Ok(None)
    }
}

impl<R: BufRead> ReadRecord for Reader<R> {
    type Record = Record;

    /// Read the next record into `buf`. Returns false once the input is exhausted.
    fn read_record(&mut self, buf: &mut Self::Record) -> Result<bool> {
        let Some(id) = self.next_header()? else {
            return Ok(false);
        };
        let first_line = self.lineno;

        let (buf_id, seq) = buf.fields_mut();
        seq.clear();
        while self.next_line()? {
            if let Some(next) = self.line.strip_prefix('>') {
                self.header = Some(next.to_owned());
                break;
            }
            seq.extend_from_slice(self.line.as_bytes());
        }

        validate::id(&id).wrap_err_with(|| format!("Invalid FASTA header at line {first_line}"))?;
        ensure!(
            !seq.is_empty(),
            "FASTA record '{id}' at line {first_line} has no sequence"
        );
        validate::seq(seq)
            .wrap_err_with(|| format!("Invalid sequence of FASTA record '{id}'"))?;
        *buf_id = id;
        Ok(true)
    }
}
