use derive_getters::Getters;
use derive_more::Into;
use eyre::{ensure, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, Into)]
pub struct Deflate {
    level: u8,
}

impl Deflate {
    pub const FAST: Deflate = Deflate { level: 1 };
    pub const DEFAULT: Deflate = Deflate { level: 6 };
    pub const BEST: Deflate = Deflate { level: 9 };

    pub fn new(level: u8) -> Result<Self> {
        ensure!(level <= 9, "Invalid DEFLATE compression level: {}", level);
        Ok(Self { level })
    }
}

impl Default for Deflate {
    fn default() -> Self {
        Deflate::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, Into)]
pub struct Bgzf {
    deflate: Deflate,
}

impl Bgzf {
    pub const DEFAULT: Bgzf = Bgzf {
        deflate: Deflate::DEFAULT,
    };

    pub fn new(deflate: Deflate) -> Self {
        Self { deflate }
    }
}

impl Default for Bgzf {
    fn default() -> Self {
        Bgzf::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deflate_level() -> Result<()> {
        assert_eq!(*Deflate::new(0)?.level(), 0);
        assert_eq!(Deflate::new(9)?, Deflate::BEST);
        assert!(Deflate::new(10).is_err());
        assert_eq!(*Bgzf::default().deflate(), Deflate::DEFAULT);
        Ok(())
    }
}
