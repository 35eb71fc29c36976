pub use cigar::{aligned_seq_to_cigar, alignment_to_seq_coordinate, Cigar, SeqPosition};
pub use op::Op;
pub use step::Step;

mod cigar;
mod op;
mod step;
