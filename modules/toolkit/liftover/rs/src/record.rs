//! Liftover results and their JSON/TSV renderings.

use compara_core_rs::loc::Region;
use compara_core_rs::Error;
use derive_getters::{Dissolve, Getters};
use eyre::Result;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::str::FromStr;

/// The lifted source region. Coordinates are 1-based closed, strands are `1`/`-1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Params {
    src_genome: String,
    src_chr: String,
    src_start: u64,
    src_end: u64,
    src_strand: i8,
    flank: u64,
    dest_genome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    src_name: Option<String>,
}

impl Params {
    pub fn new(src_genome: &str, region: &Region, flank: u64, dest_genome: &str) -> Self {
        Self {
            src_genome: src_genome.to_owned(),
            src_chr: region.contig().to_owned(),
            src_start: region.start() + 1,
            src_end: region.end(),
            src_strand: region.strand().numeric(),
            flank,
            dest_genome: dest_genome.to_owned(),
            src_name: region.name().map(str::to_owned),
        }
    }
}

/// A single destination region with its sequence, in the same conventions as [Params].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Mapping {
    dest_chr: String,
    dest_start: u64,
    dest_end: u64,
    dest_strand: i8,
    dest_sequence: String,
}

impl Mapping {
    pub fn new(region: &Region, sequence: String) -> Self {
        Self {
            dest_chr: region.contig().to_owned(),
            dest_start: region.start() + 1,
            dest_end: region.end(),
            dest_strand: region.strand().numeric(),
            dest_sequence: sequence,
        }
    }
}

/// All destination regions of a single source region. `results` is empty if nothing was lifted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Dissolve)]
pub struct LiftoverRecord {
    params: Params,
    results: Vec<Mapping>,
}

impl LiftoverRecord {
    pub fn new(params: Params, results: Vec<Mapping>) -> Self {
        Self { params, results }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Tsv,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "JSON" => Ok(Self::Json),
            "TSV" => Ok(Self::Tsv),
            _ => Err(Error::InvalidArgument(format!(
                "unsupported output format: '{s}', expected JSON or TSV"
            ))),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Tsv => write!(f, "TSV"),
        }
    }
}

const TSV_HEADER: [&str; 17] = [
    "src_genome",
    "src_name",
    "src_chr",
    "src_start",
    "src_end",
    "src_strand",
    "flank",
    "dest_genome",
    "lifted_src_chr",
    "lifted_src_start",
    "lifted_src_end",
    "lifted_src_strand",
    "dest_chr",
    "dest_start",
    "dest_end",
    "dest_strand",
    "dest_sequence",
];

/// One TSV line: the source parameters repeated for every destination region.
#[derive(Serialize)]
struct Row<'a> {
    src_genome: &'a str,
    src_name: Option<&'a str>,
    src_chr: &'a str,
    src_start: u64,
    src_end: u64,
    src_strand: i8,
    flank: u64,
    dest_genome: &'a str,
    // Always empty, halLiftover doesn't report the lifted source region
    lifted_src_chr: Option<&'a str>,
    lifted_src_start: Option<u64>,
    lifted_src_end: Option<u64>,
    lifted_src_strand: Option<i8>,
    dest_chr: &'a str,
    dest_start: u64,
    dest_end: u64,
    dest_strand: i8,
    dest_sequence: &'a str,
}

pub fn write(records: &[LiftoverRecord], format: OutputFormat, writer: impl Write) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(records, writer),
        OutputFormat::Tsv => write_tsv(records, writer),
    }
}

pub fn write_json(records: &[LiftoverRecord], mut writer: impl Write) -> Result<()> {
    serde_json::to_writer(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Tab-separated and unquoted, with one line per destination region. The header is always
/// written, records without results produce no lines.
pub fn write_tsv(records: &[LiftoverRecord], writer: impl Write) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(TSV_HEADER)?;

    for record in records {
        let params = &record.params;
        for mapping in &record.results {
            writer.serialize(Row {
                src_genome: &params.src_genome,
                src_name: params.src_name.as_deref(),
                src_chr: &params.src_chr,
                src_start: params.src_start,
                src_end: params.src_end,
                src_strand: params.src_strand,
                flank: params.flank,
                dest_genome: &params.dest_genome,
                lifted_src_chr: None,
                lifted_src_start: None,
                lifted_src_end: None,
                lifted_src_strand: None,
                dest_chr: &mapping.dest_chr,
                dest_start: mapping.dest_start,
                dest_end: mapping.dest_end,
                dest_strand: mapping.dest_strand,
                dest_sequence: &mapping.dest_sequence,
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}
