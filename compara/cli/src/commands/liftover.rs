use clap::Args;
use compara_core_rs::loc::{Region, Strand};
use compara_external_rs::hal::HalStats;
use compara_liftover_rs::gene::GeneLiftover;
use compara_liftover_rs::source::make_source_bed;
use compara_liftover_rs::{record, regions, HalCache, Liftover, OutputFormat};
use eyre::{Result, WrapErr};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

pub fn parse_strand(value: &str) -> Result<Strand, String> {
    value
        .parse()
        .map_err(|_| format!("strand must be '+' or '-', got '{value}'"))
}

#[derive(Args, Debug, Clone)]
pub struct HalLiftoverArgs {
    /// Input HAL file.
    hal_file: PathBuf,
    /// Source genome.
    src_genome: String,
    /// Destination genome.
    dest_genome: String,
    /// Output file.
    output_file: PathBuf,

    /// 1-based region to lift, e.g. chr1:16-18:1.
    #[arg(long, value_name = "STR", conflicts_with = "src_region_tsv")]
    src_region: Option<String>,

    /// TSV file with chr, start, end, strand and optionally name columns.
    #[arg(long, value_name = "FILE", required_unless_present = "src_region")]
    src_region_tsv: Option<PathBuf>,

    /// Directory with HAL-derived files. Defaults to the HAL path with its extension replaced by
    /// '_cache' (e.g. /path/to/aln.hal -> /path/to/aln_cache).
    #[arg(long, value_name = "PATH")]
    hal_cache: Option<PathBuf>,

    /// Length of the upstream/downstream flanking regions to include in the query.
    #[arg(long, value_name = "INT", default_value_t = 0, allow_negative_numbers = true)]
    flank: i64,

    /// Format of the output file: JSON or TSV.
    #[arg(long, value_name = "STR", default_value = "JSON")]
    output_format: OutputFormat,

    /// Directory with the HAL and UCSC executables. By default they're looked up in PATH.
    #[arg(long, value_name = "PATH")]
    exe_dir: Option<PathBuf>,
}

impl HalLiftoverArgs {
    pub fn run(&self) -> Result<()> {
        let cache = match &self.hal_cache {
            Some(path) => HalCache::new(path),
            None => HalCache::beside(&self.hal_file)?,
        };

        let regions = match (&self.src_region, &self.src_region_tsv) {
            (Some(region), None) => vec![Region::from_1_based_str(region)?],
            (None, Some(tsv)) => regions::read_tsv(tsv)?,
            (Some(_), Some(_)) => {
                eyre::bail!("only one of '--src-region' or '--src-region-tsv' can be set")
            }
            (None, None) => eyre::bail!("one of '--src-region' or '--src-region-tsv' must be set"),
        };

        let liftover = Liftover::new(
            &self.hal_file,
            &self.src_genome,
            &self.dest_genome,
            cache,
            self.exe_dir.clone(),
        )
        .with_flank(self.flank)?;
        let records = liftover.run(&regions)?;

        let output = File::create(&self.output_file)
            .wrap_err_with(|| format!("Failed to create {}", self.output_file.display()))?;
        record::write(&records, self.output_format, BufWriter::new(output))
    }
}

#[derive(Args, Debug, Clone)]
pub struct HalGeneLiftoverArgs {
    /// Input HAL file.
    hal_file: PathBuf,
    /// Source genome name.
    src_genome: String,
    /// Destination genome name.
    dest_genome: String,
    /// Output PSL file.
    output_file: PathBuf,

    /// 1-based region to lift, e.g. chr11:2159779-2161221:-1.
    #[arg(long, value_name = "STR")]
    region: String,

    /// Length of the upstream/downstream flanking regions to include in the query.
    #[arg(long, value_name = "INT", default_value_t = 0, allow_negative_numbers = true)]
    flank: i64,

    /// Directory with the HAL and UCSC executables. By default they're looked up in PATH.
    #[arg(long, value_name = "PATH")]
    exe_dir: Option<PathBuf>,
}

impl HalGeneLiftoverArgs {
    pub fn run(&self) -> Result<()> {
        let region = Region::from_1_based_str(&self.region)?;
        GeneLiftover::new(self.exe_dir.clone()).run(
            &self.hal_file,
            &self.src_genome,
            &self.dest_genome,
            &region,
            self.flank,
            &self.output_file,
        )
    }
}

#[derive(Args, Debug, Clone)]
pub struct MakeSourceBedArgs {
    /// Input HAL file.
    hal_file: PathBuf,
    /// Source HAL genome name.
    source_genome: String,
    /// Source HAL sequence name.
    source_sequence: String,
    /// Source region BED file.
    bed_file: PathBuf,

    /// Start position of the source location (0-based). Defaults to the sequence start.
    #[arg(long, value_name = "INT")]
    start: Option<u64>,

    /// End position of the source location (0-based, exclusive). Defaults to the sequence end.
    #[arg(long, value_name = "INT")]
    end: Option<u64>,

    /// Strand of the source location.
    #[arg(long, value_parser = parse_strand, default_value = "+")]
    strand: Strand,

    /// Directory with the HAL executables. By default they're looked up in PATH.
    #[arg(long, value_name = "PATH")]
    exe_dir: Option<PathBuf>,
}

impl MakeSourceBedArgs {
    pub fn run(&self) -> Result<()> {
        make_source_bed(
            &HalStats::new(self.exe_dir.clone()),
            &self.hal_file,
            &self.source_genome,
            &self.source_sequence,
            &self.bed_file,
            self.start,
            self.end,
            self.strand,
        )
    }
}
