//! Export of a reference sequence's alignment from a HAL file as MAF, dropping small blocks.

use crate::output::write_maf_atomically;
use compara_external_rs::hal::{Hal2Maf, Params};
use compara_io_rs::maf::{self, Block};
use compara_io_rs::WriteRecord;
use derive_getters::Getters;
use eyre::{Result, WrapErr};
use std::path::Path;

/// Minimum size of an exported block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters)]
pub struct BlockFilter {
    min_block_seqs: usize,
    min_block_length: usize,
}

impl Default for BlockFilter {
    fn default() -> Self {
        Self {
            min_block_seqs: 3,
            min_block_length: 200,
        }
    }
}

impl BlockFilter {
    pub fn new(min_block_seqs: usize, min_block_length: usize) -> Self {
        Self {
            min_block_seqs,
            min_block_length,
        }
    }

    pub fn accepts(&self, block: &Block) -> bool {
        block.rows().len() >= self.min_block_seqs && block.columns() >= self.min_block_length
    }
}

/// Run `hal2maf` and write the blocks passing `filter` to `output`. Returns the number of blocks
/// written.
pub fn hal_to_maf(
    hal2maf: &Hal2Maf,
    hal: &Path,
    output: &Path,
    params: &Params,
    filter: &BlockFilter,
) -> Result<u64> {
    log::info!(
        "Extracting {}.{} alignments with {} target genome(s)",
        params.ref_genome(),
        params.ref_sequence(),
        params.target_genomes().len()
    );

    let (total, written) = write_maf_atomically(output, maf::SCORING_NA, |writer| {
        let (mut total, mut written) = (0u64, 0u64);
        hal2maf.for_each_block(hal, params, |block| {
            total += 1;
            if filter.accepts(&block) {
                writer.write_record(&block)?;
                written += 1;
            }
            Ok(())
        })?;
        Ok((total, written))
    })
    .wrap_err_with(|| format!("Failed to export MAF from {}", hal.display()))?;

    log::info!("Kept {written} of {total} MAF blocks");
    Ok(written)
}
