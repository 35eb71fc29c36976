mod filter;
pub mod genomes;
pub mod hal_to_maf;
mod output;
pub mod process;
pub mod to_fasta;
pub mod trim;

pub use filter::Filter;
pub use process::{process_cactus_maf, Stats};
