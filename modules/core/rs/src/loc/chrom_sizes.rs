use ahash::AHashMap;

use crate::Error;

/// Lengths of all sequences in a genome, keyed by sequence name.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ChromSizes {
    sizes: AHashMap<String, u64>,
}

impl ChromSizes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new sequence. Fails if the sequence was already registered.
    pub fn insert(&mut self, name: impl Into<String>, length: u64) -> Result<(), Error> {
        let name = name.into();
        if self.sizes.contains_key(&name) {
            return Err(Error::InvalidArgument(format!(
                "duplicate sequence name in chrom sizes: '{name}'"
            )));
        }
        self.sizes.insert(name, length);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.sizes.get(name).copied()
    }

    /// Length of the given sequence, or [Error::UnknownSequence] if it's not listed.
    pub fn length_of(&self, name: &str) -> Result<u64, Error> {
        self.get(name)
            .ok_or_else(|| Error::UnknownSequence(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

/// Later duplicates overwrite earlier entries. Use [ChromSizes::insert] to detect them.
impl FromIterator<(String, u64)> for ChromSizes {
    fn from_iter<T: IntoIterator<Item = (String, u64)>>(iter: T) -> Self {
        Self {
            sizes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrom_sizes() -> Result<(), Error> {
        let mut sizes = ChromSizes::new();
        assert!(sizes.is_empty());

        sizes.insert("chr1", 248956422)?;
        sizes.insert("chrM", 16569)?;
        assert_eq!(sizes.len(), 2);
        assert_eq!(sizes.get("chr1"), Some(248956422));
        assert_eq!(sizes.length_of("chrM")?, 16569);
        assert_eq!(
            sizes.length_of("chr2"),
            Err(Error::UnknownSequence("chr2".into()))
        );

        assert!(sizes.insert("chr1", 10).is_err());
        assert_eq!(sizes.get("chr1"), Some(248956422));
        Ok(())
    }
}
