/// `Op` represents a single column of a sequence within a multiple alignment.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Op {
    /// The sequence has a letter in this column (M)
    Match,
    /// The sequence has a gap in this column (D)
    Deletion,
}

impl Op {
    /// Returns the symbol representation of the operation.
    pub fn symbol(&self) -> char {
        match self {
            Op::Match => 'M',
            Op::Deletion => 'D',
        }
    }

    /// Operation for a single character of an aligned sequence: `-` is a gap, everything else
    /// is a letter.
    pub fn of_aligned_char(ch: char) -> Self {
        match ch {
            '-' => Op::Deletion,
            _ => Op::Match,
        }
    }

    /// Whether the operation consumes a letter of the unaligned sequence.
    pub fn consumes_seq(&self) -> bool {
        matches!(self, Op::Match)
    }
}

impl TryFrom<char> for Op {
    type Error = ();

    /// Tries to convert a character into an `Op`.
    /// Returns an error if the character does not represent a valid operation.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'M' => Ok(Op::Match),
            'D' => Ok(Op::Deletion),
            _ => Err(()),
        }
    }
}
