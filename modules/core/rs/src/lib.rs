pub use error::Error;

pub mod alignment;
mod error;
pub mod loc;
pub mod num;
