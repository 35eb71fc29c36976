use thiserror::Error;

/// Validation failures of genomic coordinates and alignment strings.
///
/// Everything above the core crate works with `eyre::Report`; these variants survive the
/// conversion and can be recovered with `Report::downcast_ref::<Error>()`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid interval: start ({start}) must be less than end ({end})")]
    InvalidInterval { start: String, end: String },

    #[error("invalid region: {0}")]
    InvalidRegion(String),

    #[error("sequence '{0}' not found in genome chrom sizes")]
    UnknownSequence(String),

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{coord} is larger than the maximum size of the alignment {length}")]
    OutOfRange { coord: i64, length: u64 },

    #[error("invalid CIGAR line '{cigar}': {reason}")]
    InvalidCigar { cigar: String, reason: String },
}
