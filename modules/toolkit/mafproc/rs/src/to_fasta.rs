//! Split a MAF file into one FASTA file per block, with a JSON sidecar describing the location of
//! every aligned sequence.

use ahash::AHashMap;
use compara_core_rs::loc::Strand;
use compara_io_rs::fasta::{self, DEFAULT_LINE_WIDTH};
use compara_io_rs::maf::{self, Block};
use compara_io_rs::{ReadRecord, WriteRecord};
use eyre::{bail, ensure, eyre, Result, WrapErr};
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Split MAF `src` fields of the form `<genome>.<seqid>` into their parts.
///
/// A field with a single dot is split on it. Otherwise the genome must be one of the known genome
/// names, which makes names containing dots unambiguous as long as no genome name followed by a
/// dot is a prefix of another one (`genomeA` and `genomeA.1` can't be told apart).
#[derive(Debug, Clone)]
pub struct SrcParser {
    regex: Option<Regex>,
    cache: AHashMap<String, (String, String)>,
}

impl SrcParser {
    /// Parser that only accepts fields with a single dot.
    pub fn new() -> Self {
        Self {
            regex: None,
            cache: AHashMap::new(),
        }
    }

    pub fn with_genomes(genomes: &[String]) -> Result<Self> {
        Ok(Self {
            regex: Some(compile_src_regex(genomes)?),
            cache: AHashMap::new(),
        })
    }

    /// Genome and sequence names of the `src` field.
    pub fn parse(&mut self, src: &str) -> Result<(String, String)> {
        if let Some(parsed) = self.cache.get(src) {
            return Ok(parsed.clone());
        }

        let mut parts = src.split('.');
        let parsed = match (parts.next(), parts.next(), parts.next()) {
            (Some(genome), Some(seqid), None) => (genome.to_owned(), seqid.to_owned()),
            _ => {
                let Some(regex) = &self.regex else {
                    bail!(
                        "MAF src field parse failed due to multiple dot separators, please set \
                         genome names with the '--genomes-file' parameter: '{src}'"
                    );
                };
                let captures = regex
                    .captures(src)
                    .ok_or_else(|| eyre!("MAF src regex failed to parse MAF src field: '{src}'"))?;
                (captures["genome"].to_owned(), captures["seqid"].to_owned())
            }
        };

        self.cache.insert(src.to_owned(), parsed.clone());
        Ok(parsed)
    }
}

impl Default for SrcParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Regex with `genome` and `seqid` groups matching `<genome>.<seqid>` for the given genomes.
pub fn compile_src_regex(genomes: &[String]) -> Result<Regex> {
    ensure!(
        !genomes.is_empty(),
        "cannot create a MAF src regex without genome names"
    );
    for genome in genomes {
        for (ind, _) in genome.match_indices('.') {
            let prefix = &genome[..ind];
            ensure!(
                !genomes.iter().any(|x| x == prefix),
                "cannot create a MAF src regex, genome name '{prefix}' is a prefix of '{genome}'"
            );
        }
    }

    let alternatives = genomes
        .iter()
        .map(|x| regex::escape(x))
        .collect::<Vec<_>>()
        .join("|");
    Ok(Regex::new(&format!(
        r"^(?P<genome>{alternatives})[.](?P<seqid>.+)$"
    ))?)
}

/// Multilevel directory path derived from an integer, after the eHive `dir_revhash`: the first
/// decimal digit is dropped and the rest, reversed, become the path components
/// (`1234` -> `4/3/2`, `10` -> `0`, `7` -> `.`).
///
/// A directory thus holds the files of up to ten integers, which must be told apart by file name.
pub fn map_uint_to_path(value: u64) -> PathBuf {
    let digits = value.to_string();
    let path: PathBuf = digits[1..]
        .chars()
        .rev()
        .map(|digit| digit.to_string())
        .collect();

    if path.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        path
    }
}

/// Location of an aligned sequence on its genome. Coordinates are 1-based on the forward strand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenomicAlign {
    genome_name: String,
    dnafrag_name: String,
    dnafrag_start: u64,
    dnafrag_end: u64,
    dnafrag_strand: i8,
}

fn write_block(block: &Block, ind: u64, outdir: &Path, parser: &mut SrcParser) -> Result<()> {
    let dir = outdir.join(map_uint_to_path(ind));
    std::fs::create_dir_all(&dir)
        .wrap_err_with(|| format!("Failed to create {}", dir.display()))?;

    let mut aligns = Vec::with_capacity(block.rows().len());
    let mut writer = fasta::Writer::from_path(dir.join(format!("{ind}.fa")), DEFAULT_LINE_WIDTH)?;
    for row in block.rows() {
        let (genome_name, dnafrag_name) = parser.parse(row.src())?;
        let (dnafrag_start, dnafrag_end) = row.forward_coordinates();

        let id = format!("{genome_name}:{dnafrag_name}:{dnafrag_start}:{dnafrag_end}");
        writer.write_record(&fasta::Record::new(id, row.text().clone())?)?;

        aligns.push(GenomicAlign {
            genome_name,
            dnafrag_name,
            dnafrag_start,
            dnafrag_end,
            dnafrag_strand: match row.strand() {
                Strand::Forward => 1,
                Strand::Reverse => -1,
            },
        });
    }
    writer.finish()?;

    let json = std::fs::File::create(dir.join(format!("{ind}.json")))?;
    serde_json::to_writer(std::io::BufWriter::new(json), &aligns)?;
    Ok(())
}

/// Write `<outdir>/<map_uint_to_path(i)>/<i>.fa` and `<i>.json` for every block `i` of the MAF
/// file. Returns the number of blocks.
pub fn maf_to_fasta(maf: &Path, outdir: &Path, genomes: Option<&[String]>) -> Result<u64> {
    let mut parser = match genomes {
        Some(genomes) => SrcParser::with_genomes(genomes)?,
        None => SrcParser::new(),
    };

    let mut reader = maf::Reader::from_path(maf)?;
    let mut block = Block::default();
    let mut count = 0;
    while reader.read_record(&mut block)? {
        write_block(&block, count, outdir, &mut parser)
            .wrap_err_with(|| format!("Failed to convert MAF block {count}"))?;
        count += 1;
    }

    log::info!("Converted {count} MAF blocks to FASTA in {}", outdir.display());
    Ok(count)
}
