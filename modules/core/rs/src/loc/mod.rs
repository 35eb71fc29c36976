pub use chrom_sizes::ChromSizes;
pub use interval::{Interval, IntervalOp};
pub use region::Region;
pub use strand::Strand;

mod chrom_sizes;
mod interval;
mod region;
mod strand;
