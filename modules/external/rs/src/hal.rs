//! HAL toolkit executables.

use crate::process::{self, Running};
use crate::ucsc::PslPosTarget;
use crate::Tool;
use compara_core_rs::loc::ChromSizes;
use compara_io_rs::maf::{self, Block};
use compara_io_rs::{chrom_sizes, ReadRecord};
use derive_getters::Getters;
use eyre::{ensure, Result, WrapErr};
use std::io::BufReader;
use std::path::Path;
use std::process::Stdio;

define_tool!(
    /// `halLiftover`: maps BED regions between two genomes of a HAL alignment.
    HalLiftover => "halLiftover"
);

impl HalLiftover {
    /// Lift the regions in `src_bed` onto `dest_genome`, writing the mapped BED to `dest_bed`.
    pub fn lift_bed(
        &self,
        hal: &Path,
        src_genome: &str,
        src_bed: &Path,
        dest_genome: &str,
        dest_bed: &Path,
    ) -> Result<()> {
        let mut command = self.command();
        command
            .arg(hal)
            .arg(src_genome)
            .arg(src_bed)
            .arg(dest_genome)
            .arg(dest_bed);
        process::run(command)?;
        Ok(())
    }

    /// Lift the regions as PSL and pipe the result through `pslPosTarget` into `output`, so that
    /// every alignment is reported on the positive strand of the destination genome.
    pub fn lift_psl(
        &self,
        hal: &Path,
        src_genome: &str,
        src_bed: &Path,
        dest_genome: &str,
        pos_target: &PslPosTarget,
        output: &Path,
    ) -> Result<()> {
        let mut liftover = self.command();
        liftover
            .arg("--outPSL")
            .arg(hal)
            .arg(src_genome)
            .arg(src_bed)
            .arg(dest_genome)
            .arg("stdout");

        let mut postprocess = pos_target.command();
        postprocess.arg("stdin").arg(output);

        process::pipe(liftover, postprocess)?;
        Ok(())
    }
}

define_tool!(
    /// `halStats`: summary information about a HAL file.
    HalStats => "halStats"
);

impl HalStats {
    /// Sequence lengths of the given genome.
    pub fn chrom_sizes(&self, hal: &Path, genome: &str) -> Result<ChromSizes> {
        let mut command = self.command();
        command.arg("--chromSizes").arg(genome).arg(hal);
        let stdout = process::output(command)?;
        chrom_sizes::from_reader(stdout.as_slice())
            .wrap_err_with(|| format!("Failed to parse chrom sizes of {genome}"))
    }
}

/// Parameters of a `hal2maf` extraction.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Params {
    ref_genome: String,
    ref_sequence: String,
    target_genomes: Vec<String>,
    max_block_len: u64,
    max_ref_gap: u64,
}

impl Params {
    /// Without explicit limits, blocks of multi-genome extractions are allowed to be longer and
    /// to span longer reference gaps than pairwise ones.
    pub fn new(
        ref_genome: String,
        ref_sequence: String,
        target_genomes: Vec<String>,
        max_block_len: Option<u64>,
        max_ref_gap: Option<u64>,
    ) -> Result<Self> {
        ensure!(!ref_genome.is_empty(), "Reference genome can't be empty");
        ensure!(!ref_sequence.is_empty(), "Reference sequence can't be empty");
        ensure!(
            !target_genomes.is_empty(),
            "At least one target genome is required"
        );
        ensure!(
            target_genomes.iter().all(|x| !x.is_empty() && !x.contains(',')),
            "Target genome names must be non-empty and can't contain commas: {target_genomes:?}"
        );

        let (default_block_len, default_ref_gap) = if target_genomes.len() > 1 {
            (1_000_000, 500)
        } else {
            (500_000, 50)
        };

        Ok(Self {
            ref_genome,
            ref_sequence,
            target_genomes,
            max_block_len: max_block_len.unwrap_or(default_block_len),
            max_ref_gap: max_ref_gap.unwrap_or(default_ref_gap),
        })
    }
}

define_tool!(
    /// `hal2maf`: exports a HAL alignment as MAF.
    Hal2Maf => "hal2maf"
);

impl Hal2Maf {
    /// Stream the extracted MAF blocks to `on_block` one at a time. Stops at the first error,
    /// terminating the extraction.
    pub fn for_each_block(
        &self,
        hal: &Path,
        params: &Params,
        mut on_block: impl FnMut(Block) -> Result<()>,
    ) -> Result<()> {
        let mut command = self.command();
        command
            .arg(hal)
            .arg("stdout")
            .arg("--refGenome")
            .arg(&params.ref_genome)
            .arg("--refSequence")
            .arg(&params.ref_sequence)
            .arg("--targetGenomes")
            .arg(params.target_genomes.join(","))
            .arg("--maxBlockLen")
            .arg(params.max_block_len.to_string())
            .arg("--maxRefGap")
            .arg(params.max_ref_gap.to_string());

        let mut extraction = Running::spawn(command, Stdio::null(), Stdio::piped())?;
        let Some(stdout) = extraction.take_stdout() else {
            extraction.kill();
            eyre::bail!("hal2maf stdout isn't available");
        };

        let mut reader = maf::Reader::new(BufReader::new(stdout));
        let mut block = Block::default();
        loop {
            let consumed = reader
                .read_record(&mut block)
                .and_then(|read| match read {
                    true => on_block(std::mem::take(&mut block)).map(|_| true),
                    false => Ok(false),
                });

            match consumed {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    extraction.kill();
                    return Err(e);
                }
            }
        }

        extraction.wait()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_defaults() -> Result<()> {
        let pairwise = Params::new("hg38".into(), "chr19".into(), vec!["mm39".into()], None, None)?;
        assert_eq!(*pairwise.max_block_len(), 500_000);
        assert_eq!(*pairwise.max_ref_gap(), 50);

        let multiple = Params::new(
            "hg38".into(),
            "chr19".into(),
            vec!["mm39".into(), "rn7".into()],
            None,
            Some(10),
        )?;
        assert_eq!(*multiple.max_block_len(), 1_000_000);
        assert_eq!(*multiple.max_ref_gap(), 10);
        Ok(())
    }

    #[test]
    fn test_params_validation() {
        assert!(Params::new("hg38".into(), "chr19".into(), vec![], None, None).is_err());
        assert!(Params::new("".into(), "chr19".into(), vec!["mm39".into()], None, None).is_err());
        assert!(
            Params::new("hg38".into(), "chr19".into(), vec!["a,b".into()], None, None).is_err()
        );
    }
}
