use std::fmt::Display;
use std::str::FromStr;

/// DNA strand of a region or an aligned sequence.
///
/// Files and command lines spell it in two ways: as a sign (`+`/`-`, BED and MAF) or as a number
/// (`1`/`-1`, Ensembl region strings and TSV tables). Both are accepted here and neither leaks
/// past the I/O boundary.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[repr(i8)]
pub enum Strand {
    /// The forward strand, also known as the positive strand or Watson strand.
    #[default]
    Forward = 1,
    /// The reverse strand, also known as the negative strand or Crick strand.
    Reverse = -1,
}

impl Strand {
    /// Get the symbolic representation of the strand.
    pub fn symbol(&self) -> char {
        match self {
            Self::Forward => '+',
            Self::Reverse => '-',
        }
    }

    /// Get the numeric (Ensembl) representation of the strand.
    pub fn numeric(&self) -> i8 {
        *self as i8
    }

    /// Parse the numeric representation, e.g. `"1"` or `"-1"`.
    pub fn from_numeric(value: &str) -> Option<Self> {
        value
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|x| Self::try_from(x).ok())
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Strand {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(Self::Forward),
            '-' => Ok(Self::Reverse),
            _ => Err(()),
        }
    }
}

impl TryFrom<i64> for Strand {
    type Error = ();

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Forward),
            -1 => Ok(Self::Reverse),
            _ => Err(()),
        }
    }
}

impl FromStr for Strand {
    type Err = ();

    /// Parse the symbolic representation, i.e. `+` or `-`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "+" => Ok(Self::Forward),
            "-" => Ok(Self::Reverse),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strand_symbol_and_numeric() {
        assert_eq!(Strand::Forward.symbol(), '+');
        assert_eq!(Strand::Reverse.symbol(), '-');
        assert_eq!(Strand::Forward.numeric(), 1);
        assert_eq!(Strand::Reverse.numeric(), -1);
        assert_eq!(format!("{}", Strand::Reverse), "-");
    }

    #[test]
    fn test_strand_parsing() {
        assert_eq!("+".parse::<Strand>(), Ok(Strand::Forward));
        assert_eq!("-".parse::<Strand>(), Ok(Strand::Reverse));
        assert_eq!(".".parse::<Strand>(), Err(()));
        assert_eq!(Strand::try_from('x'), Err(()));

        assert_eq!(Strand::from_numeric("1"), Some(Strand::Forward));
        assert_eq!(Strand::from_numeric("-1"), Some(Strand::Reverse));
        assert_eq!(Strand::from_numeric("0"), None);
        assert_eq!(Strand::from_numeric("+"), None);
        assert_eq!(Strand::from_numeric("forward"), None);
    }

    #[test]
    fn test_strand_default() {
        assert_eq!(Strand::default(), Strand::Forward);
    }
}
