use clap::Args;
use compara_external_rs::hal::{Hal2Maf, Params};
use compara_mafproc_rs::hal_to_maf::{hal_to_maf, BlockFilter};
use compara_mafproc_rs::process::write_dataflow;
use compara_mafproc_rs::to_fasta::maf_to_fasta;
use compara_mafproc_rs::{genomes, process_cactus_maf, Filter};
use eyre::Result;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ProcessCactusMafArgs {
    /// Input MAF file.
    input_maf: PathBuf,
    /// Output processed MAF file.
    processed_maf: PathBuf,

    /// Minimum number of alignment rows per block.
    #[arg(long, value_name = "INT", default_value_t = 2)]
    min_block_rows: usize,

    /// Minimum number of alignment columns per block.
    #[arg(long, value_name = "INT", default_value_t = 20)]
    min_block_cols: usize,

    /// Minimum unaligned sequence length of each aligned sequence.
    #[arg(long, value_name = "INT", default_value_t = 5)]
    min_seq_length: u64,

    /// Expected number of alignment blocks in the input MAF file. 0 disables the check.
    #[arg(long, value_name = "INT")]
    expected_block_count: Option<u64>,

    /// Optional eHive dataflow file.
    #[arg(long, value_name = "PATH")]
    dataflow_file: Option<PathBuf>,
}

impl ProcessCactusMafArgs {
    pub fn run(&self) -> Result<()> {
        let filter = Filter::new(self.min_block_rows, self.min_block_cols, self.min_seq_length);
        let expected = self.expected_block_count.filter(|x| *x > 0);

        let stats = process_cactus_maf(&self.input_maf, &self.processed_maf, &filter, expected)?;
        if let Some(dataflow) = &self.dataflow_file {
            write_dataflow(dataflow, &self.processed_maf, &stats)?;
        }
        Ok(())
    }
}

#[derive(Args, Debug, Clone)]
pub struct MafToFastaArgs {
    /// Input MAF file with src fields of the form '<genome>.<seqid>'.
    maf_file: PathBuf,
    /// Output directory under which FASTA and JSON files are created.
    output_dir: PathBuf,

    /// File listing the genomes in the input MAF file, one per line. Required if any genome or
    /// sequence name contains a dot.
    #[arg(long, value_name = "PATH")]
    genomes_file: Option<PathBuf>,
}

impl MafToFastaArgs {
    pub fn run(&self) -> Result<()> {
        let genomes = self
            .genomes_file
            .as_ref()
            .map(genomes::read_list)
            .transpose()?;
        maf_to_fasta(&self.maf_file, &self.output_dir, genomes.as_deref())?;
        Ok(())
    }
}

#[derive(Args, Debug, Clone)]
pub struct HalToMafArgs {
    /// Input HAL file.
    hal_file: PathBuf,
    /// Output MAF file.
    maf_file: PathBuf,

    /// Reference genome for the output MAF file.
    #[arg(long, value_name = "STR")]
    ref_genome: String,

    /// Output sequence within the reference genome.
    #[arg(long, value_name = "STR")]
    ref_sequence: String,

    /// File listing genomes to include in output alignments, one per line.
    #[arg(long, value_name = "PATH")]
    genomes_file: PathBuf,

    /// Minimum number of sequences per block.
    #[arg(long, value_name = "INT", default_value_t = 3)]
    min_block_seqs: usize,

    /// Minimum number of columns per block.
    #[arg(long, value_name = "INT", default_value_t = 200)]
    min_block_length: usize,

    /// Maximum number of columns per block. Defaults to 1000000 for several target genomes and
    /// 500000 for one.
    #[arg(long, value_name = "INT")]
    max_block_length: Option<u64>,

    /// Maximum reference sequence gap length. Defaults to 500 for several target genomes and 50
    /// for one.
    #[arg(long, value_name = "INT")]
    max_ref_gap: Option<u64>,

    /// Directory with the HAL executables. By default they're looked up in PATH.
    #[arg(long, value_name = "PATH")]
    exe_dir: Option<PathBuf>,
}

impl HalToMafArgs {
    pub fn run(&self) -> Result<()> {
        let params = Params::new(
            self.ref_genome.clone(),
            self.ref_sequence.clone(),
            genomes::read_list(&self.genomes_file)?,
            self.max_block_length,
            self.max_ref_gap,
        )?;
        let filter = BlockFilter::new(self.min_block_seqs, self.min_block_length);

        hal_to_maf(
            &Hal2Maf::new(self.exe_dir.clone()),
            &self.hal_file,
            &self.maf_file,
            &params,
            &filter,
        )?;
        Ok(())
    }
}
