//! Clean-up of Cactus MAF output: every block is trimmed, filtered and written if it survived.

use crate::output::write_maf_atomically;
use crate::trim::trim;
use crate::Filter;
use compara_io_rs::maf::{self, Block};
use compara_io_rs::{ReadRecord, WriteRecord};
use derive_getters::Getters;
use eyre::{ensure, Result, WrapErr};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Getters)]
pub struct Stats {
    block_count_before_processing: u64,
    block_count_after_processing: u64,
    seq_count_after_processing: u64,
}

/// Trim and filter all blocks of `input` into `output`.
///
/// With `expected_block_count`, the number of input blocks must match it. On any error, including
/// a count mismatch, `output` isn't created.
pub fn process_cactus_maf(
    input: &Path,
    output: &Path,
    filter: &Filter,
    expected_block_count: Option<u64>,
) -> Result<Stats> {
    let mut reader = maf::Reader::from_path(input)?;

    let stats = write_maf_atomically(output, maf::SCORING_NONE, |writer| {
        let mut stats = Stats::default();
        let mut block = Block::default();
        while reader.read_record(&mut block)? {
            stats.block_count_before_processing += 1;
            trim(&mut block).wrap_err_with(|| {
                format!("Failed to trim MAF block {}", stats.block_count_before_processing)
            })?;

            if let Some(processed) = filter.apply(std::mem::take(&mut block)) {
                writer.write_record(&processed)?;
                stats.block_count_after_processing += 1;
                stats.seq_count_after_processing += processed.rows().len() as u64;
            }
        }

        if let Some(expected) = expected_block_count {
            ensure!(
                stats.block_count_before_processing == expected,
                "Number of input blocks ({}) does not match expected block count ({})",
                stats.block_count_before_processing,
                expected
            );
        }
        Ok(stats)
    })
    .wrap_err_with(|| format!("Failed to process {}", input.display()))?;

    log::info!(
        "Kept {} of {} MAF blocks ({} sequences)",
        stats.block_count_after_processing,
        stats.block_count_before_processing,
        stats.seq_count_after_processing
    );
    Ok(stats)
}

#[derive(Serialize)]
struct Dataflow<'a> {
    maf_file: &'a str,
    maf_block_count: u64,
    maf_seq_count: u64,
}

/// eHive dataflow event on branch 2 describing the processed MAF file.
pub fn dataflow_event(maf_file: &Path, stats: &Stats) -> Result<String> {
    let maf_file = maf_file.to_string_lossy();
    let payload = serde_json::to_string(&Dataflow {
        maf_file: &maf_file,
        maf_block_count: stats.block_count_after_processing,
        maf_seq_count: stats.seq_count_after_processing,
    })?;
    Ok(format!("2 {payload}"))
}

pub fn write_dataflow(path: &Path, maf_file: &Path, stats: &Stats) -> Result<()> {
    let event = dataflow_event(maf_file, stats)?;
    std::fs::write(path, format!("{event}\n"))
        .wrap_err_with(|| format!("Failed to write dataflow file {}", path.display()))
}
