use std::fmt::Display;
use std::str::FromStr;

use itertools::Itertools;

use super::op::Op;
use super::step::Step;
use crate::Error;

/// Location of an alignment column in the unaligned sequence (1-based).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum SeqPosition {
    /// The column holds the sequence letter at this position.
    Aligned(u64),
    /// The column is a gap between two letters of the sequence. `before` is the number of letters
    /// preceding the gap (0 for a leading gap) and `after` is always `before + 1`.
    Gap { before: u64, after: u64 },
}

impl SeqPosition {
    pub fn positions(&self) -> Vec<u64> {
        match *self {
            SeqPosition::Aligned(pos) => vec![pos],
            SeqPosition::Gap { before, after } => vec![before, after],
        }
    }
}

impl Display for SeqPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeqPosition::Aligned(pos) => write!(f, "{pos}"),
            SeqPosition::Gap { before, after } => write!(f, "{before}\t{after}"),
        }
    }
}

/// Gapped layout of a single sequence within a multiple alignment.
///
/// The text form lists each operation followed by an optional run length, e.g. `M4D3M2` or
/// `MDMD3M2D`. A missing run length means 1.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Default)]
pub struct Cigar {
    steps: Vec<Step>,
}

impl Cigar {
    pub fn new(mut steps: Vec<Step>) -> Self {
        Step::optimize(&mut steps);
        Self { steps }
    }

    /// Build the CIGAR line of an aligned sequence, where `-` marks a gap.
    pub fn from_aligned_seq(seq: &str) -> Self {
        let steps = seq
            .chars()
            .map(Op::of_aligned_char)
            .chunk_by(|op| *op)
            .into_iter()
            .map(|(op, run)| Step::new(op, run.count() as u64))
            .collect();
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Total number of alignment columns, saturating at `u64::MAX`.
    pub fn len(&self) -> u64 {
        self.steps
            .iter()
            .fold(0u64, |total, x| total.saturating_add(x.len))
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of letters in the unaligned sequence.
    pub fn seq_len(&self) -> u64 {
        self.steps
            .iter()
            .filter(|x| x.op.consumes_seq())
            .fold(0u64, |total, x| total.saturating_add(x.len))
    }

    /// Operations for every column of the alignment.
    pub fn columns(&self) -> impl Iterator<Item = Op> + '_ {
        self.steps
            .iter()
            .flat_map(|step| std::iter::repeat_n(step.op, step.len as usize))
    }

    /// Translate a 1-based alignment column into the 1-based sequence coordinate.
    pub fn seq_position(&self, coord: i64) -> Result<SeqPosition, Error> {
        if coord < 1 {
            return Err(Error::InvalidArgument(format!(
                "coord needs to be > 0: current value {coord}"
            )));
        }
        let column = coord as u64;

        let (mut start, mut gaps) = (0u64, 0u64);
        for step in &self.steps {
            // Columns are at most i64::MAX, so a saturated end still bounds them
            let end = start.saturating_add(step.len);
            if column <= end {
                return Ok(match step.op {
                    Op::Match => SeqPosition::Aligned(column - gaps),
                    Op::Deletion => {
                        let before = start - gaps;
                        SeqPosition::Gap {
                            before,
                            after: before + 1,
                        }
                    }
                });
            }
            if step.op == Op::Deletion {
                gaps += step.len;
            }
            start = end;
        }

        Err(Error::OutOfRange {
            coord,
            length: start,
        })
    }
}

impl Display for Cigar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for step in &self.steps {
            write!(f, "{}", step.op.symbol())?;
            if step.len > 1 {
                write!(f, "{}", step.len)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Cigar {
    type Err = Error;

    fn from_str(cigar: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| Error::InvalidCigar {
            cigar: cigar.to_string(),
            reason,
        };

        let mut steps = Vec::new();
        let mut total = 0u64;
        let mut chars = cigar.char_indices().peekable();
        while let Some((ind, ch)) = chars.next() {
            let op = match Op::try_from(ch) {
                Ok(op) => op,
                Err(()) if ch.is_ascii_digit() => {
                    return Err(invalid(format!(
                        "run length at position {ind} is not preceded by an operation"
                    )))
                }
                Err(()) => return Err(invalid(format!("unknown operation '{ch}' at position {ind}"))),
            };

            let digits_start = ind + ch.len_utf8();
            let mut digits_end = digits_start;
            while let Some((i, _)) = chars.next_if(|(_, x)| x.is_ascii_digit()) {
                digits_end = i + 1;
            }

            let len = if digits_end == digits_start {
                1
            } else {
                let digits = &cigar[digits_start..digits_end];
                let len = digits
                    .parse::<u64>()
                    .map_err(|_| invalid(format!("run length '{digits}' is too large")))?;
                if len == 0 {
                    return Err(invalid(format!("zero-length run at position {ind}")));
                }
                len
            };
            total = total.checked_add(len).ok_or_else(|| {
                invalid(format!("alignment length overflows at position {ind}"))
            })?;
            steps.push(Step::new(op, len));
        }

        Ok(Self::new(steps))
    }
}

/// Convert an aligned sequence into its CIGAR line, e.g. `ATGC---CG` becomes `M4D3M2`.
pub fn aligned_seq_to_cigar(aligned_seq: &str) -> String {
    Cigar::from_aligned_seq(aligned_seq).to_string()
}

/// Convert a 1-based alignment column into the 1-based position in the unaligned sequence.
pub fn alignment_to_seq_coordinate(cigar: &str, coord: i64) -> Result<SeqPosition, Error> {
    cigar.parse::<Cigar>()?.seq_position(coord)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligned_seq_to_cigar() {
        for (seq, cigar) in [
            ("ATGC---CG", "M4D3M2"),
            ("ATGCATTGAT---ATTTA--AT", "M10D3M5D2M2"),
            ("A-T-GCA--T-TGAT---ATTTA--AT", "MDMDM3D2MDM4D3M5D2M2"),
            ("ATGCATTGATATTTAAT", "M17"),
            ("-----------------", "D17"),
            ("-ATGCATTGATATTTAAT", "DM17"),
            ("ATGCATTGATATTTAAT-", "M17D"),
            ("--ATGCATTGATATTTAAT", "D2M17"),
            ("ATGCATTGATATTTAAT--", "M17D2"),
            ("A", "M"),
            ("-", "D"),
            ("", ""),
        ] {
            assert_eq!(aligned_seq_to_cigar(seq), cigar, "Sequence: {seq}");
        }
    }

    #[test]
    fn test_cigar_expansion_preserves_gaps() -> Result<(), Error> {
        for seq in ["ATGC---CG", "-A-T--GC", "NNNN", "----", "ac*.-x"] {
            let cigar: Cigar = aligned_seq_to_cigar(seq).parse()?;
            let expected: Vec<_> = seq.chars().map(Op::of_aligned_char).collect();
            assert_eq!(cigar.columns().collect::<Vec<_>>(), expected);
            assert_eq!(cigar.len(), seq.len() as u64);
            assert_eq!(
                cigar.seq_len(),
                seq.chars().filter(|x| *x != '-').count() as u64
            );
        }
        Ok(())
    }

    #[test]
    fn test_parse_cigar() -> Result<(), Error> {
        let cigar: Cigar = "M10D3M5D2M2".parse()?;
        assert_eq!(
            cigar.steps(),
            &[
                Step::new(Op::Match, 10),
                Step::new(Op::Deletion, 3),
                Step::new(Op::Match, 5),
                Step::new(Op::Deletion, 2),
                Step::new(Op::Match, 2),
            ]
        );

        let cigar: Cigar = "MDMD3M2D".parse()?;
        assert_eq!(
            cigar.steps(),
            &[
                Step::new(Op::Match, 1),
                Step::new(Op::Deletion, 1),
                Step::new(Op::Match, 1),
                Step::new(Op::Deletion, 3),
                Step::new(Op::Match, 2),
                Step::new(Op::Deletion, 1),
            ]
        );
        assert_eq!(cigar.to_string(), "MDMD3M2D");

        // Repeated operations are merged
        let cigar: Cigar = "M2M3D".parse()?;
        assert_eq!(cigar.to_string(), "M5D");

        assert!("".parse::<Cigar>()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_parse_invalid_cigar() {
        for cigar in [
            "10M",
            "M3X2",
            "M0",
            "M3D0M",
            "m3",
            "M 3",
            "M99999999999999999999999",
            "M5D18446744073709551615",
        ] {
            let result = cigar.parse::<Cigar>();
            assert!(
                matches!(result, Err(Error::InvalidCigar { .. })),
                "CIGAR: {cigar:?}, result: {result:?}"
            );
        }
    }

    #[test]
    fn test_huge_runs() -> Result<(), Error> {
        assert!(matches!(
            alignment_to_seq_coordinate("M5D18446744073709551615", 6),
            Err(Error::InvalidCigar { .. })
        ));

        let cigar = Cigar::new(vec![Step::new(Op::Match, 5), Step::new(Op::Deletion, u64::MAX)]);
        assert_eq!(cigar.len(), u64::MAX);
        assert_eq!(cigar.seq_len(), 5);
        assert_eq!(cigar.seq_position(6)?, SeqPosition::Gap { before: 5, after: 6 });
        assert_eq!(cigar.seq_position(i64::MAX)?, SeqPosition::Gap { before: 5, after: 6 });
        Ok(())
    }

    #[test]
    fn test_alignment_to_seq_coordinate() -> Result<(), Error> {
        for (cigar, coord, expected) in [
            ("M10D3M5D2M2", 21, vec![16]),
            ("M10D3M5D2M2", 12, vec![10, 11]),
            ("M10D3M5D2M2", 13, vec![10, 11]),
            ("M10D3M5D2M2", 11, vec![10, 11]),
            ("M10D3M5D2M2", 19, vec![15, 16]),
            ("M10D3M5D2M2", 20, vec![15, 16]),
            ("M10D3M5D2M2", 1, vec![1]),
            ("M10D3M5D2M2", 22, vec![17]),
            ("D17", 15, vec![0, 1]),
            ("M17", 15, vec![15]),
            ("M4D3M2", 5, vec![4, 5]),
            ("M4D3M2", 8, vec![5]),
        ] {
            let position = alignment_to_seq_coordinate(cigar, coord)?;
            assert_eq!(position.positions(), expected, "CIGAR: {cigar}, coord: {coord}");
        }

        assert_eq!(
            alignment_to_seq_coordinate("M4D3M2", 5)?,
            SeqPosition::Gap {
                before: 4,
                after: 5
            }
        );
        Ok(())
    }

    #[test]
    fn test_alignment_to_seq_coordinate_errors() {
        assert_eq!(
            alignment_to_seq_coordinate("M10D3M5D2M2", 30),
            Err(Error::OutOfRange {
                coord: 30,
                length: 22
            })
        );
        assert_eq!(
            alignment_to_seq_coordinate("M10D3M5D2M2", 23),
            Err(Error::OutOfRange {
                coord: 23,
                length: 22
            })
        );
        for coord in [0, -4] {
            assert!(matches!(
                alignment_to_seq_coordinate("M10D3M5D2M2", coord),
                Err(Error::InvalidArgument(_))
            ));
        }
        assert!(matches!(
            alignment_to_seq_coordinate("M3X", 1),
            Err(Error::InvalidCigar { .. })
        ));
    }
}
