use compara_io_rs::maf::Block;
use derive_getters::Getters;

/// Minimum requirements for a trimmed MAF block to be kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters)]
pub struct Filter {
    min_block_rows: usize,
    min_block_cols: usize,
    min_seq_length: u64,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            min_block_rows: 2,
            min_block_cols: 20,
            min_seq_length: 5,
        }
    }
}

impl Filter {
    pub fn new(min_block_rows: usize, min_block_cols: usize, min_seq_length: u64) -> Self {
        Self {
            min_block_rows,
            min_block_cols,
            min_seq_length,
        }
    }

    /// Drop short rows, then the whole block if it's too narrow or has too few rows left.
    /// Blocks without columns are always dropped.
    pub fn apply(&self, mut block: Block) -> Option<Block> {
        let columns = block.columns();
        if columns == 0 || columns < self.min_block_cols {
            return None;
        }

        block.retain_rows(|row| *row.size() >= self.min_seq_length);
        if block.rows().is_empty() || block.rows().len() < self.min_block_rows {
            return None;
        }
        Some(block)
    }
}
