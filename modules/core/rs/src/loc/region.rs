use std::fmt::Display;
use std::str::FromStr;

use derive_getters::Dissolve;

use super::chrom_sizes::ChromSizes;
use super::interval::{Interval, IntervalOp};
use super::strand::Strand;
use crate::Error;

/// A stranded DNA sequence region in 0-based half-open coordinates.
///
/// The 1-based closed form `chrom:start-end:strand` (strand as `1`/`-1`) is only used to talk to
/// users: [Region::from_1_based_str] parses it and the `Display` implementation produces it.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Dissolve)]
pub struct Region {
    contig: String,
    interval: Interval<u64>,
    strand: Strand,
    name: Option<String>,
}

impl Region {
    /// Create a region from 0-based half-open coordinates.
    pub fn new(
        contig: impl Into<String>,
        start: u64,
        end: u64,
        strand: Strand,
    ) -> Result<Self, Error> {
        let contig = contig.into();
        if contig.is_empty() {
            return Err(Error::InvalidRegion("sequence name can't be empty".into()));
        }
        let interval = Interval::new(start, end).map_err(|_| {
            Error::InvalidRegion(format!(
                "0-based region end ({end}) must be greater than region start ({start})"
            ))
        })?;

        Ok(Self {
            contig,
            interval,
            strand,
            name: None,
        })
    }

    /// Create a region from 1-based closed coordinates and a numeric strand (`1` or `-1`).
    pub fn from_1_based_attribs(
        contig: impl Into<String>,
        start: i64,
        end: i64,
        strand: i64,
    ) -> Result<Self, Error> {
        if start < 1 {
            return Err(Error::InvalidRegion(format!(
                "1-based region start must be greater than or equal to 1: {start}"
            )));
        }
        if start > end {
            return Err(Error::InvalidRegion(format!(
                "1-based region end ({end}) must be greater than or equal to region start ({start})"
            )));
        }
        let strand = Strand::try_from(strand).map_err(|_| {
            Error::InvalidRegion(format!("1-based region has invalid strand: '{strand}'"))
        })?;

        // start >= 1 and end >= start, so both casts are lossless
        Self::new(contig, (start - 1) as u64, end as u64, strand)
    }

    /// Same as [Region::from_1_based_attribs], but all attributes are given as text, e.g. when
    /// they come from a TSV table.
    pub fn parse_1_based_attribs(
        contig: &str,
        start: &str,
        end: &str,
        strand: &str,
    ) -> Result<Self, Error> {
        let parse = |field: &str, value: &str| {
            value.trim().parse::<i64>().map_err(|_| {
                Error::InvalidRegion(format!("1-based region has invalid {field}: '{value}'"))
            })
        };
        let strand_num = match Strand::from_numeric(strand) {
            Some(x) => x.numeric() as i64,
            None => {
                return Err(Error::InvalidRegion(format!(
                    "1-based region has invalid strand: '{strand}'"
                )))
            }
        };
        Self::from_1_based_attribs(contig, parse("start", start)?, parse("end", end)?, strand_num)
    }

    /// Parse a 1-based region string of the form `chrom:start-end:strand`.
    pub fn from_1_based_str(region: &str) -> Result<Self, Error> {
        let tokenise_error =
            || Error::InvalidRegion(format!("failed to tokenise 1-based region string: '{region}'"));

        let mut parts = region.split(':');
        let (contig, range, strand) = match (parts.next(), parts.next(), parts.next(), parts.next())
        {
            (Some(contig), Some(range), Some(strand), None)
                if !contig.is_empty() && !strand.is_empty() =>
            {
                (contig, range, strand)
            }
            _ => return Err(tokenise_error()),
        };

        let (start, end) = range.split_once('-').ok_or_else(tokenise_error)?;
        let is_number = |x: &str| !x.is_empty() && x.bytes().all(|b| b.is_ascii_digit());
        if !is_number(start) || !is_number(end) {
            return Err(tokenise_error());
        }
        let start = start.parse::<i64>().map_err(|_| tokenise_error())?;
        let end = end.parse::<i64>().map_err(|_| tokenise_error())?;

        let strand = strand.parse::<i64>().map_err(|_| {
            Error::InvalidRegion(format!("1-based region has invalid strand: '{strand}'"))
        })?;
        Self::from_1_based_attribs(contig, start, end, strand)
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name.filter(|x| !x.is_empty());
        self
    }

    pub fn contig(&self) -> &str {
        &self.contig
    }

    pub fn interval(&self) -> &Interval<u64> {
        &self.interval
    }

    /// 0-based start position.
    pub fn start(&self) -> u64 {
        self.interval.start()
    }

    /// 0-based exclusive end position (equal to the 1-based inclusive end).
    pub fn end(&self) -> u64 {
        self.interval.end()
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the 1-based region string corresponding to this region.
    pub fn to_1_based_string(&self) -> String {
        self.to_string()
    }

    /// Extend the region by `flank` bases upstream and downstream, clamped to the bounds of its
    /// sequence.
    ///
    /// Fails if the sequence isn't listed in `chrom_sizes` or if the region extends beyond it.
    pub fn flanked_within(&self, flank: u64, chrom_sizes: &ChromSizes) -> Result<Interval<u64>, Error> {
        let length = chrom_sizes.length_of(&self.contig)?;
        if self.end() > length {
            return Err(Error::InvalidCoordinate(format!(
                "region end ({}) must not be greater than the corresponding chromosome length ({}: {})",
                self.end(),
                self.contig,
                length
            )));
        }

        // The region is non-empty and ends within the sequence, so the sequence is non-empty too
        let bounds = Interval::new(0, length)?;
        self.interval.flanked(flank, &bounds).ok_or_else(|| {
            Error::InvalidCoordinate(format!("region {self} lies outside of its sequence"))
        })
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.contig,
            self.start() + 1,
            self.end(),
            self.strand.numeric()
        )
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_1_based_str(s)
    }
}
