pub mod cigar;
pub mod gerp;
pub mod liftover;
pub mod maf;
