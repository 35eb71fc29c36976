use super::validate;
use derive_getters::{Dissolve, Getters};
use eyre::Result;

/// FASTA record holding a single-line ID and a possibly gapped sequence.
/// The default record is an empty read buffer and doesn't pass validation.
#[derive(Debug, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Hash, Dissolve, Getters)]
pub struct Record {
    id: String,
    seq: Vec<u8>,
}

impl TryFrom<(&str, &str)> for Record {
    type Error = eyre::Report;

    fn try_from((id, seq): (&str, &str)) -> Result<Self> {
        Self::new(id.to_owned(), seq.as_bytes().to_vec())
    }
}

impl Record {
    /// Creates a new FASTA record with the given ID and sequence.
    pub fn new(id: String, seq: Vec<u8>) -> Result<Self> {
        validate::id(&id)?;
        validate::seq(&seq)?;
        Ok(Self { id, seq })
    }

    /// Sequence as text. Validation guarantees it is ASCII.
    pub fn seq_str(&self) -> &str {
        std::str::from_utf8(&self.seq).unwrap_or_default()
    }

    pub(super) fn fields_mut(&mut self) -> (&mut String, &mut Vec<u8>) {
        (&mut self.id, &mut self.seq)
    }
}
