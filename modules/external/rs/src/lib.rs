#[macro_use]
mod tool;

mod error;
pub mod gerp;
pub mod hal;
pub mod process;
pub mod ucsc;

pub use error::Error;
pub use tool::Tool;
