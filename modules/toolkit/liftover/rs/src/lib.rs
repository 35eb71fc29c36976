pub mod cache;
pub mod gene;
pub mod liftover;
pub mod record;
pub mod regions;
pub mod source;

pub use cache::HalCache;
pub use liftover::Liftover;
pub use record::{LiftoverRecord, OutputFormat};
