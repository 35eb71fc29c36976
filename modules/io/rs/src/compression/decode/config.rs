use eyre::{Result, WrapErr};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Config {
    #[default]
    Uncompressed,
    Gzip,
    Bgzf,
}

impl Config {
    /// Guess the compression from the file extension. Files without a known extension are
    /// sniffed for the gzip magic bytes; BGZF content is then read as multi-member gzip.
    pub fn infer_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let by_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| match ext {
                "gz" | "gzip" => Config::Gzip,
                "bgz" | "bgzf" => Config::Bgzf,
                _ => Config::Uncompressed,
            })
            .unwrap_or(Config::Uncompressed);
        if by_extension != Config::Uncompressed {
            return Ok(by_extension);
        }

        let kind = infer::get_from_path(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        let config = match kind.map(|x| (x.extension(), x.mime_type())) {
            Some(("gz", "application/gzip")) => Config::Gzip,
            // Always assume plain text if there is no clear match
            _ => Config::Uncompressed,
        };
        Ok(config)
    }
}
