// Format specification: https://genome.ucsc.edu/FAQ/FAQformat.html#format5
//
// Only `a` (alignment block) and `s` (sequence row) lines are kept. Header and comment lines
// (`#`) are skipped on input, as are the `i`, `e` and `q` lines within blocks, which become stale
// once columns are edited.

mod reader;
mod record;
mod writer;

pub use reader::Reader;
pub use record::{Block, Row, GAP};
pub use writer::{Writer, SCORING_NA, SCORING_NONE};
