use super::validate;
use compara_core_rs::loc::{Interval, IntervalOp, Region, Strand};
use derive_getters::{Dissolve, Getters};
use eyre::{OptionExt, Result};

/// A single BED6 record. Coordinates are 0-based half-open, strand `.` is stored as `None`.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Getters, Dissolve)]
pub struct Bed6 {
    seqid: String,
    interval: Interval<u64>,
    name: String,
    score: u16,
    strand: Option<Strand>,
}

impl Bed6 {
    pub fn new(
        seqid: String,
        interval: Interval<u64>,
        name: String,
        score: u16,
        strand: Option<Strand>,
    ) -> Result<Self> {
        validate::seqid(&seqid)?;
        validate::name(&name)?;
        validate::score(&score)?;
        Ok(Self {
            seqid,
            interval,
            name,
            score,
            strand,
        })
    }

    /// BED record for the region itself, with the name defaulting to `.` and score 0.
    pub fn from_region(region: &Region) -> Result<Self> {
        Self::new(
            region.contig().to_owned(),
            *region.interval(),
            region.name().unwrap_or(".").to_owned(),
            0,
            Some(region.strand()),
        )
    }
}

impl Default for Bed6 {
    fn default() -> Self {
        Self {
            seqid: "_".to_string(),
            interval: Interval::default(),
            name: ".".to_string(),
            score: 0,
            strand: None,
        }
    }
}

impl TryFrom<Bed6> for Region {
    type Error = eyre::Report;

    fn try_from(value: Bed6) -> Result<Self> {
        let strand = value
            .strand
            .ok_or_eyre("BED record must be stranded to become a region")?;
        let region = Region::new(
            value.seqid,
            value.interval.start(),
            value.interval.end(),
            strand,
        )?;
        let name = (value.name != ".").then_some(value.name);
        Ok(region.with_name(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bed6_validation() -> Result<()> {
        let interval = Interval::new(10, 20)?;
        assert!(Bed6::new("chr1".into(), interval, ".".into(), 0, None).is_ok());
        assert!(Bed6::new("".into(), interval, ".".into(), 0, None).is_err());
        assert!(Bed6::new("chr 1".into(), interval, ".".into(), 0, None).is_err());
        assert!(Bed6::new("chr1".into(), interval, "".into(), 0, None).is_err());
        assert!(Bed6::new("chr1".into(), interval, "gene\t1".into(), 0, None).is_err());
        assert!(Bed6::new("chr1".into(), interval, ".".into(), 1001, None).is_err());
        Ok(())
    }

    #[test]
    fn test_bed6_to_region() -> Result<()> {
        let region = Region::new("chr1", 14, 19, Strand::Reverse)?;
        let bed = Bed6::from_region(&region)?;
        assert_eq!(bed.seqid(), "chr1");
        assert_eq!(*bed.interval(), (14, 19));
        assert_eq!(bed.name(), ".");
        assert_eq!(*bed.strand(), Some(Strand::Reverse));
        assert_eq!(Region::try_from(bed)?, region);

        let named = Bed6::new("chr2".into(), Interval::new(0, 5)?, "0".into(), 0, Some(Strand::Forward))?;
        assert_eq!(Region::try_from(named)?.name(), Some("0"));

        let unstranded = Bed6::new("chr2".into(), Interval::new(0, 5)?, ".".into(), 0, None)?;
        assert!(Region::try_from(unstranded).is_err());
        Ok(())
    }
}
