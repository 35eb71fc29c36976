use compara_core_rs::loc::ChromSizes;
use compara_io_rs::chrom_sizes;
use eyre::{ensure, Result};
use std::path::{Path, PathBuf};

/// Directory with files derived from a HAL alignment:
///
/// ```text
/// <cache>/genome/2bit/<genome>.2bit
/// <cache>/genome/chrom_sizes/<genome>.chrom.sizes
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalCache {
    root: PathBuf,
}

impl HalCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Cache next to the HAL file, named after it: `/path/to/aln.hal` -> `/path/to/aln_cache`.
    pub fn beside(hal: &Path) -> Result<Self> {
        let stem = hal
            .file_stem()
            .ok_or_else(|| eyre::eyre!("HAL path has no file name: {}", hal.display()))?;
        let mut name = stem.to_os_string();
        name.push("_cache");
        Ok(Self::new(hal.with_file_name(name)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn two_bit(&self, genome: &str) -> PathBuf {
        self.root
            .join("genome")
            .join("2bit")
            .join(format!("{genome}.2bit"))
    }

    pub fn chrom_sizes_path(&self, genome: &str) -> PathBuf {
        self.root
            .join("genome")
            .join("chrom_sizes")
            .join(format!("{genome}.chrom.sizes"))
    }

    /// Path to the 2bit file of the genome, which must exist.
    pub fn require_two_bit(&self, genome: &str) -> Result<PathBuf> {
        let path = self.two_bit(genome);
        ensure!(
            path.is_file(),
            "cannot find destination genome 2bit file {}",
            path.display()
        );
        Ok(path)
    }

    pub fn chrom_sizes(&self, genome: &str) -> Result<ChromSizes> {
        chrom_sizes::read(self.chrom_sizes_path(genome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() -> Result<()> {
        let cache = HalCache::beside(Path::new("/data/aln.hal"))?;
        assert_eq!(cache.root(), Path::new("/data/aln_cache"));
        assert_eq!(
            cache.two_bit("genomeB"),
            PathBuf::from("/data/aln_cache/genome/2bit/genomeB.2bit")
        );
        assert_eq!(
            cache.chrom_sizes_path("genomeA"),
            PathBuf::from("/data/aln_cache/genome/chrom_sizes/genomeA.chrom.sizes")
        );
        assert!(cache.require_two_bit("genomeB").is_err());
        Ok(())
    }
}
