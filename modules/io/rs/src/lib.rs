pub mod bed;
pub mod chrom_sizes;
pub mod compression;
pub mod fasta;
pub mod maf;
mod traits;

pub use traits::{ReadRecord, WriteRecord};
