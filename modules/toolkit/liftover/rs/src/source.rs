//! Source-region BED files: the input side of `halLiftover`.

use compara_core_rs::loc::{ChromSizes, Region, Strand};
use compara_core_rs::Error;
use compara_external_rs::hal::HalStats;
use compara_io_rs::bed::{self, Bed6};
use compara_io_rs::{ReadRecord, WriteRecord};
use eyre::{Result, WrapErr};
use std::path::Path;

/// Write a BED6 file with one line per region, in input order: the region extended by `flank`
/// bases on both sides and clamped to its sequence, named `.` with score 0.
///
/// All regions are checked against `chrom_sizes` before the file is created, so nothing is
/// written on error.
pub fn make_src_region_file(
    regions: &[Region],
    chrom_sizes: &ChromSizes,
    path: impl AsRef<Path>,
    flank: i64,
) -> Result<()> {
    let flank = u64::try_from(flank).map_err(|_| {
        Error::InvalidCoordinate(format!("flank length must be greater than or equal to 0: {flank}"))
    })?;

    let mut records = Vec::with_capacity(regions.len());
    for region in regions {
        let interval = region.flanked_within(flank, chrom_sizes)?;
        records.push(Bed6::new(
            region.contig().to_owned(),
            interval,
            ".".into(),
            // halLiftover requires an integer score
            0,
            Some(region.strand()),
        )?);
    }

    let path = path.as_ref();
    let mut writer = bed::Writer::from_path(path)?;
    writer
        .write_records(&records)
        .wrap_err_with(|| format!("Failed to write source regions to {}", path.display()))?;
    writer.finish()?;
    Ok(())
}

/// Stranded regions of a BED6 file, e.g. the output of `halLiftover`.
pub fn extract_regions_from_bed(path: impl AsRef<Path>) -> Result<Vec<Region>> {
    let path = path.as_ref();
    let mut records = Vec::new();
    bed::Reader::from_path(path)?
        .read_to_end(&mut records)
        .wrap_err_with(|| format!("Failed to read BED regions from {}", path.display()))?;

    records.into_iter().map(Region::try_from).collect()
}

/// Write the source BED for a single location of a HAL genome. Missing bounds default to the
/// whole sequence; positions are 0-based half-open.
#[allow(clippy::too_many_arguments)]
pub fn make_source_bed(
    hal_stats: &HalStats,
    hal: &Path,
    genome: &str,
    sequence: &str,
    bed: &Path,
    start: Option<u64>,
    end: Option<u64>,
    strand: Strand,
) -> Result<()> {
    let chrom_sizes = hal_stats.chrom_sizes(hal, genome)?;
    let end = match end {
        Some(end) => end,
        None => chrom_sizes
            .length_of(sequence)
            .wrap_err_with(|| format!("Unknown sequence in HAL genome {genome}"))?,
    };
    let region = Region::new(sequence, start.unwrap_or(0), end, strand)?;

    log::info!("Writing source region {region} of {genome} to {}", bed.display());
    make_src_region_file(&[region], &chrom_sizes, bed, 0)
}
