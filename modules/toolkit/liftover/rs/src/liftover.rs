//! Liftover of regions between two genomes of a HAL alignment.

use crate::cache::HalCache;
use crate::record::{LiftoverRecord, Mapping, Params};
use crate::source::{extract_regions_from_bed, make_src_region_file};
use compara_core_rs::loc::{ChromSizes, Region};
use compara_core_rs::Error;
use compara_external_rs::hal::HalLiftover;
use compara_external_rs::ucsc::TwoBitToFa;
use eyre::{Result, WrapErr};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Liftover {
    hal: PathBuf,
    src_genome: String,
    dest_genome: String,
    cache: HalCache,
    flank: u64,
    hal_liftover: HalLiftover,
    two_bit_to_fa: TwoBitToFa,
}

impl Liftover {
    /// `exe_dir` holds the HAL and UCSC executables, `None` resolves them through `PATH`.
    pub fn new(
        hal: impl Into<PathBuf>,
        src_genome: impl Into<String>,
        dest_genome: impl Into<String>,
        cache: HalCache,
        exe_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            hal: hal.into(),
            src_genome: src_genome.into(),
            dest_genome: dest_genome.into(),
            cache,
            flank: 0,
            hal_liftover: HalLiftover::new(exe_dir.clone()),
            two_bit_to_fa: TwoBitToFa::new(exe_dir),
        }
    }

    /// Extend every source region by `flank` bases upstream and downstream.
    pub fn with_flank(mut self, flank: i64) -> Result<Self, Error> {
        self.flank = u64::try_from(flank).map_err(|_| {
            Error::InvalidCoordinate(format!(
                "flank length must be greater than or equal to 0: {flank}"
            ))
        })?;
        Ok(self)
    }

    /// Lift all regions. Records are ordered by source sequence name and keep the input order
    /// within each sequence.
    pub fn run(&self, regions: &[Region]) -> Result<Vec<LiftoverRecord>> {
        let two_bit = self.cache.require_two_bit(&self.dest_genome)?;
        let chrom_sizes = self.cache.chrom_sizes(&self.src_genome)?;

        let mut by_chrom: BTreeMap<&str, Vec<&Region>> = BTreeMap::new();
        for region in regions {
            by_chrom.entry(region.contig()).or_default().push(region);
        }

        let mut records = Vec::with_capacity(regions.len());
        for (chrom, group) in by_chrom {
            log::info!("Lifting {} region(s) on {chrom}", group.len());
            for region in group {
                let record = self
                    .lift(region, &chrom_sizes, &two_bit)
                    .wrap_err_with(|| format!("Failed to lift {region}"))?;
                records.push(record);
            }
        }
        Ok(records)
    }

    fn lift(&self, region: &Region, chrom_sizes: &ChromSizes, two_bit: &Path) -> Result<LiftoverRecord> {
        let params = Params::new(&self.src_genome, region, self.flank, &self.dest_genome);

        let workdir = tempfile::tempdir()?;
        let src_bed = workdir.path().join("src_regions.bed");
        let dest_bed = workdir.path().join("dest_regions.bed");

        make_src_region_file(
            std::slice::from_ref(region),
            chrom_sizes,
            &src_bed,
            self.flank as i64,
        )?;
        self.hal_liftover.lift_bed(
            &self.hal,
            &self.src_genome,
            &src_bed,
            &self.dest_genome,
            &dest_bed,
        )?;

        let lifted = extract_regions_from_bed(&dest_bed)?;
        if lifted.is_empty() {
            log::debug!("{region} has no counterpart in {}", self.dest_genome);
            return Ok(LiftoverRecord::new(params, Vec::new()));
        }

        let sequences = self.two_bit_to_fa.extract(&lifted, two_bit)?;
        let results = lifted
            .iter()
            .zip(sequences)
            .map(|(region, sequence)| Mapping::new(region, sequence))
            .collect();
        Ok(LiftoverRecord::new(params, results))
    }
}
