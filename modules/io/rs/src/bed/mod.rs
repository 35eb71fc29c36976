// Format specification: https://samtools.github.io/hts-specs/BEDv1.pdf
//
// Only the first six columns are supported:
// 1. seqid: [[:graph:]]{1,255}
// 2. start: u64
// 3. end: u64
// 4. name: [\x20-\x7e]{1,255}
// 5. score: u16 [0, 1000]
// 6. strand: [+|-|.]
//
// Extra columns in the input are ignored, the writer always emits exactly six.

mod reader;
mod record;
pub mod validate;
mod writer;

pub use reader::Reader;
pub use record::Bed6;
pub use writer::Writer;
