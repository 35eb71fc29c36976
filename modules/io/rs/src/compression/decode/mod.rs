mod config;
mod stream;

pub use config::Config;
pub use stream::Stream;

use eyre::{Result, WrapErr};
use std::fs::File;
use std::path::Path;

/// Open the file for reading, guessing the compression from its extension and content.
pub fn infer_from_path(path: impl AsRef<Path>) -> Result<Stream<File>> {
    let path = path.as_ref();
    let config = Config::infer_from_path(path)?;
    let file = File::open(path).wrap_err_with(|| format!("Failed to open {}", path.display()))?;
    Stream::new(file, &config)
}
