mod config;
pub mod params;
mod stream;

pub use config::Config;
pub use stream::Stream;

use eyre::{Result, WrapErr};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Create the file for writing with the compression guessed from its extension.
pub fn infer_from_path(path: impl AsRef<Path>) -> Result<Stream<BufWriter<File>>> {
    let path = path.as_ref();
    let file =
        File::create(path).wrap_err_with(|| format!("Failed to create {}", path.display()))?;
    Stream::new(BufWriter::new(file), &Config::infer_from_path(path))
}
