mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{cigar, gerp, liftover, maf};
use std::ffi::OsString;
use std::process::ExitCode;
pub use utils::UtilsArgs;

#[derive(Parser, Debug)]
#[command(
    name = "compara",
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    utils: UtilsArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lift regions between two genomes of a HAL alignment and fetch their sequences.
    HalLiftover(liftover::HalLiftoverArgs),
    /// Lift a gene locus between two genomes of a HAL alignment to PSL.
    HalGeneLiftover(liftover::HalGeneLiftoverArgs),
    /// Make a liftover source BED file for a HAL genome sequence.
    MakeSourceBed(liftover::MakeSourceBedArgs),
    /// Trim and filter the blocks of a Cactus MAF file.
    ProcessCactusMaf(maf::ProcessCactusMafArgs),
    /// Convert each block of a MAF alignment to a FASTA file.
    MafToFasta(maf::MafToFastaArgs),
    /// Extract a MAF alignment from a HAL file.
    HalToMaf(maf::HalToMafArgs),
    /// Compute GERP conservation scores and constrained elements.
    Gerp(gerp::GerpArgs),
    /// CIGAR line utilities.
    #[command(subcommand)]
    Cigar(cigar::CigarCommand),
}

impl Command {
    fn run(&self) -> eyre::Result<()> {
        match self {
            Command::HalLiftover(args) => args.run(),
            Command::HalGeneLiftover(args) => args.run(),
            Command::MakeSourceBed(args) => args.run(),
            Command::ProcessCactusMaf(args) => args.run(),
            Command::MafToFasta(args) => args.run(),
            Command::HalToMaf(args) => args.run(),
            Command::Gerp(args) => args.run(),
            Command::Cigar(command) => command.run(),
        }
    }
}

/// Parse the command line and run the subcommand. Returns 0 on success and 1 on any failure,
/// including invalid arguments. Help and version requests succeed.
pub fn execute<I, T>(args: I) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { 1 } else { 0 };
        }
    };

    cli.utils.setup();
    match cli.command.run() {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e:?}");
            1
        }
    }
}

pub fn run<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    ExitCode::from(execute(args))
}
