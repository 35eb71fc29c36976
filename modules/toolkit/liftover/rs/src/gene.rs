//! Liftover of a single gene locus to PSL, with the alignments reported on the positive strand
//! of the destination genome.

use crate::source::make_src_region_file;
use compara_core_rs::loc::Region;
use compara_external_rs::hal::{HalLiftover, HalStats};
use compara_external_rs::ucsc::PslPosTarget;
use eyre::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct GeneLiftover {
    hal_stats: HalStats,
    hal_liftover: HalLiftover,
    pos_target: PslPosTarget,
}

impl GeneLiftover {
    pub fn new(exe_dir: Option<PathBuf>) -> Self {
        Self {
            hal_stats: HalStats::new(exe_dir.clone()),
            hal_liftover: HalLiftover::new(exe_dir.clone()),
            pos_target: PslPosTarget::new(exe_dir),
        }
    }

    /// Lift `region` with `flank` extra bases on both sides, clamped to the source sequence,
    /// and write the PSL alignments to `output`.
    pub fn run(
        &self,
        hal: &Path,
        src_genome: &str,
        dest_genome: &str,
        region: &Region,
        flank: i64,
        output: &Path,
    ) -> Result<()> {
        let chrom_sizes = self.hal_stats.chrom_sizes(hal, src_genome)?;

        let workdir = tempfile::tempdir()?;
        let src_bed = workdir.path().join("src_regions.bed");
        make_src_region_file(std::slice::from_ref(region), &chrom_sizes, &src_bed, flank)?;

        log::info!("Lifting {region} from {src_genome} to {dest_genome}");
        self.hal_liftover.lift_psl(
            hal,
            src_genome,
            &src_bed,
            dest_genome,
            &self.pos_target,
            output,
        )
    }
}
