use clap::Subcommand;
use compara_core_rs::alignment::{aligned_seq_to_cigar, alignment_to_seq_coordinate};
use eyre::Result;

#[derive(Subcommand, Debug, Clone)]
pub enum CigarCommand {
    /// Print the CIGAR line of an aligned sequence, '-' being a gap.
    FromSeq {
        /// Aligned sequence, e.g. ATGC---CG.
        seq: String,
    },
    /// Print the sequence position of a 1-based alignment column. Gap columns print the two
    /// flanking positions.
    SeqCoord {
        /// CIGAR line, e.g. M4D3M2.
        cigar: String,
        /// 1-based alignment column.
        #[arg(allow_negative_numbers = true)]
        coord: i64,
    },
}

impl CigarCommand {
    pub fn render(&self) -> Result<String> {
        match self {
            CigarCommand::FromSeq { seq } => Ok(aligned_seq_to_cigar(seq)),
            CigarCommand::SeqCoord { cigar, coord } => {
                Ok(alignment_to_seq_coordinate(cigar, *coord)?.to_string())
            }
        }
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }
}
