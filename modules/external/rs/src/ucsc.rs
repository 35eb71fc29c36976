//! UCSC Genome Browser utilities.

use crate::process;
use crate::Tool;
use compara_core_rs::loc::Region;
use compara_io_rs::bed::{self, Bed6};
use compara_io_rs::{fasta, ReadRecord, WriteRecord};
use eyre::{ensure, Result, WrapErr};
use std::ffi::OsString;
use std::path::Path;

define_tool!(
    /// `twoBitToFa`: extracts sequences from a 2bit file.
    TwoBitToFa => "twoBitToFa"
);

impl TwoBitToFa {
    /// Sequences of the given regions, in order. Reverse-strand regions are reverse complemented.
    pub fn extract(&self, regions: &[Region], two_bit: &Path) -> Result<Vec<String>> {
        if regions.is_empty() {
            return Ok(Vec::new());
        }

        let workdir = tempfile::tempdir()?;
        let bed_path = workdir.path().join("regions.bed");
        let fasta_path = workdir.path().join("regions.fa");

        // Record names are region indices to keep the order verifiable
        let mut writer = bed::Writer::from_path(&bed_path)?;
        for (ind, region) in regions.iter().enumerate() {
            let record = Bed6::new(
                region.contig().to_owned(),
                *region.interval(),
                ind.to_string(),
                0,
                Some(region.strand()),
            )?;
            writer.write_record(&record)?;
        }
        writer.finish()?;

        let mut bed_arg = OsString::from("-bed=");
        bed_arg.push(&bed_path);

        let mut command = self.command();
        command.arg(bed_arg).arg(two_bit).arg(&fasta_path);
        process::run(command)?;

        let mut records = Vec::with_capacity(regions.len());
        fasta::Reader::from_path(&fasta_path)?
            .read_to_end(&mut records)
            .wrap_err("Failed to parse twoBitToFa output")?;
        ensure!(
            records.len() == regions.len(),
            "twoBitToFa returned {} sequences for {} regions",
            records.len(),
            regions.len()
        );

        records
            .into_iter()
            .enumerate()
            .map(|(ind, record)| {
                let (id, seq) = record.dissolve();
                ensure!(
                    id == ind.to_string(),
                    "Unexpected twoBitToFa record order: got {id}, expected {ind}"
                );
                Ok(String::from_utf8(seq)?)
            })
            .collect()
    }
}

define_tool!(
    /// `pslPosTarget`: flips PSL records so that the target strand is always positive.
    PslPosTarget => "pslPosTarget"
);
