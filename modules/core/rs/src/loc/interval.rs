use std::fmt::{Debug, Display};

use crate::num::PrimInt;
use crate::Error;
use derive_getters::Dissolve;

/// Non-empty half-open interval [start, end) on a sequence.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Dissolve)]
pub struct Interval<Idx: PrimInt> {
    start: Idx,
    end: Idx,
}

/// Anything that spans a half-open [start, end) range of sequence positions.
#[allow(clippy::len_without_is_empty)]
pub trait IntervalOp {
    type Idx: PrimInt;

    fn start(&self) -> Self::Idx;

    fn end(&self) -> Self::Idx;

    fn len(&self) -> Self::Idx {
        self.end() - self.start()
    }
}

impl<T: PrimInt> IntervalOp for Interval<T> {
    type Idx = T;

    #[inline(always)]
    fn start(&self) -> Self::Idx {
        self.start
    }
    #[inline(always)]
    fn end(&self) -> Self::Idx {
        self.end
    }
}

impl<Idx: PrimInt> Interval<Idx> {
    pub fn new(start: Idx, end: Idx) -> Result<Self, Error> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(Error::InvalidInterval {
                start: format!("{start:?}"),
                end: format!("{end:?}"),
            })
        }
    }

    /// Overlapping part of two intervals. Touching intervals don't overlap.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(Self { start, end })
    }

    /// Grow the interval by `flank` positions on both sides and clip it to `within`.
    /// None if nothing is left after clipping.
    pub fn flanked(&self, flank: Idx, within: &Self) -> Option<Self> {
        Self {
            start: self.start.saturating_sub(flank),
            end: self.end.saturating_add(flank),
        }
        .intersection(within)
    }
}

impl<Idx: PrimInt> Default for Interval<Idx> {
    fn default() -> Self {
        Self {
            start: Idx::zero(),
            end: Idx::one(),
        }
    }
}

impl<Idx: PrimInt + Display> Display for Interval<Idx> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl<Idx: PrimInt> PartialEq<(Idx, Idx)> for Interval<Idx> {
    fn eq(&self, other: &(Idx, Idx)) -> bool {
        self.start == other.0 && self.end == other.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() -> Result<(), Error> {
        let interval = Interval::new(3u64, 10)?;
        assert_eq!(interval, (3, 10));
        assert_eq!(interval.len(), 7);
        assert_eq!(interval.to_string(), "[3, 10)");

        assert!(Interval::new(5u64, 5).is_err());
        assert!(Interval::new(6u64, 5).is_err());
        Ok(())
    }

    #[test]
    fn test_intersection() -> Result<(), Error> {
        let interval = Interval::new(1, 10)?;
        assert_eq!(interval.intersection(&Interval::new(10, 12)?), None);
        assert_eq!(interval.intersection(&Interval::new(0, 2)?), Some(Interval::new(1, 2)?));
        assert_eq!(interval.intersection(&Interval::new(4, 6)?), Some(Interval::new(4, 6)?));
        Ok(())
    }

    #[test]
    fn test_flanked() -> Result<(), Error> {
        let chrom = Interval::new(0u64, 33)?;

        let gene = Interval::new(15u64, 18)?;
        assert_eq!(gene.flanked(1, &chrom), Some(Interval::new(14, 19)?));
        assert_eq!(gene.flanked(0, &chrom), Some(gene));

        // Clipped to the sequence on both sides, without overflowing
        let wide = Interval::new(2u64, 30)?;
        assert_eq!(wide.flanked(5, &chrom), Some(chrom));
        assert_eq!(wide.flanked(u64::MAX, &chrom), Some(chrom));

        let outside = Interval::new(40u64, 50)?;
        assert_eq!(outside.flanked(2, &chrom), None);
        assert_eq!(outside.flanked(7, &chrom), None);
        assert_eq!(outside.flanked(8, &chrom), Some(Interval::new(32, 33)?));
        Ok(())
    }
}
