use compara_core_rs::loc::Strand;
use derive_getters::{Dissolve, Getters};
use eyre::{ensure, eyre, Result};

/// Gap symbol in the aligned text.
pub const GAP: u8 = b'-';

/// A single `s` line of an alignment block.
///
/// `start` is 0-based on the row's own strand: for minus-strand rows it's counted from the end of
/// the source sequence. `size` always equals the number of non-gap symbols in `text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Dissolve)]
pub struct Row {
    src: String,
    start: u64,
    size: u64,
    strand: Strand,
    src_size: u64,
    text: Vec<u8>,
}

impl Row {
    pub fn new(
        src: String,
        start: u64,
        size: u64,
        strand: Strand,
        src_size: u64,
        text: Vec<u8>,
    ) -> Result<Self> {
        ensure!(!src.is_empty(), "MAF src field can't be empty");
        ensure!(!text.is_empty(), "MAF row text can't be empty: {src}");
        ensure!(
            text.iter().all(|x| x.is_ascii_graphic()),
            "MAF row text must be printable ASCII without spaces: {src}"
        );

        let letters = text.iter().filter(|x| **x != GAP).count() as u64;
        ensure!(
            letters == size,
            "MAF row size ({size}) doesn't match the number of non-gap symbols ({letters}): {src}"
        );
        let end = start
            .checked_add(size)
            .ok_or_else(|| eyre!("MAF row end overflows (start {start}, size {size}): {src}"))?;
        ensure!(
            end <= src_size,
            "MAF row end ({end}) exceeds the source size ({src_size}): {src}"
        );

        Ok(Self {
            src,
            start,
            size,
            strand,
            src_size,
            text,
        })
    }

    /// End of the row on its own strand (exclusive).
    pub fn end(&self) -> u64 {
        self.start + self.size
    }

    /// 1-based closed coordinates of the row on the forward strand of the source sequence.
    pub fn forward_coordinates(&self) -> (u64, u64) {
        match self.strand {
            Strand::Forward => (self.start + 1, self.end()),
            Strand::Reverse => (self.src_size - self.end() + 1, self.src_size - self.start),
        }
    }

    pub fn is_gap(&self, column: usize) -> bool {
        self.text[column] == GAP
    }
}

/// A MAF alignment block: `a` line annotations followed by rows of equal length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Getters, Dissolve)]
pub struct Block {
    annotations: Vec<(String, String)>,
    rows: Vec<Row>,
}

impl Block {
    pub fn new(annotations: Vec<(String, String)>, rows: Vec<Row>) -> Result<Self> {
        ensure!(!rows.is_empty(), "MAF block must have at least one row");
        let columns = rows[0].text.len();
        for row in &rows[1..] {
            ensure!(
                row.text.len() == columns,
                "All rows in a MAF block must have the same length: {} has {} columns, {} has {}",
                rows[0].src,
                columns,
                row.src,
                row.text.len()
            );
        }
        Ok(Self { annotations, rows })
    }

    /// Number of alignment columns.
    pub fn columns(&self) -> usize {
        self.rows.first().map(|x| x.text.len()).unwrap_or(0)
    }

    /// Keep only the rows that satisfy the predicate.
    pub fn retain_rows(&mut self, predicate: impl FnMut(&Row) -> bool) {
        self.rows.retain(predicate);
    }

    /// Remove every column `i` with `remove[i] == true`.
    ///
    /// Rows can only lose letters at their flanks: letters removed before the first retained letter
    /// shift the row start, the rest shrink the row. Removing a letter between two retained letters
    /// of the same row is an error since MAF coordinates can't represent it.
    pub fn remove_columns(&mut self, remove: &[bool]) -> Result<()> {
        ensure!(
            remove.len() == self.columns(),
            "Column mask length ({}) doesn't match the number of MAF block columns ({})",
            remove.len(),
            self.columns()
        );

        let mut clipped = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let (mut leading, mut trailing, mut seen_letter) = (0u64, 0u64, false);
            for (symbol, removed) in row.text.iter().zip(remove) {
                if *symbol == GAP {
                    continue;
                }
                match (*removed, seen_letter) {
                    (true, false) => leading += 1,
                    (true, true) => trailing += 1,
                    (false, _) => {
                        ensure!(
                            trailing == 0,
                            "Removing MAF columns would delete letters inside row {}",
                            row.src
                        );
                        seen_letter = true;
                    }
                }
            }
            clipped.push((leading, trailing));
        }

        for (row, (leading, trailing)) in self.rows.iter_mut().zip(clipped) {
            let mut column = 0;
            row.text.retain(|_| {
                let keep = !remove[column];
                column += 1;
                keep
            });
            row.start += leading;
            row.size -= leading + trailing;
        }
        Ok(())
    }
}
