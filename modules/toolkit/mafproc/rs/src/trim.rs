use compara_io_rs::maf::Block;
use eyre::{Result, WrapErr};

/// Gap pattern of an alignment column, `true` for gaps.
fn pattern(block: &Block, column: usize) -> Vec<bool> {
    block.rows().iter().map(|row| row.is_gap(column)).collect()
}

/// A column where exactly one row has a letter.
fn is_overhang(pattern: &[bool]) -> bool {
    pattern.iter().filter(|gap| !**gap).count() == 1
}

/// Trim a block in place:
/// 1. drop columns where every row has a gap;
/// 2. in blocks with at least two rows and two columns, drop the leading run of columns where
///    a single row overhangs all others, and the trailing run likewise.
///
/// Row coordinates follow the removed letters. Trimming may leave a block without columns if
/// every column belongs to the same overhang.
pub fn trim(block: &mut Block) -> Result<()> {
    let gap_only: Vec<bool> = (0..block.columns())
        .map(|column| block.rows().iter().all(|row| row.is_gap(column)))
        .collect();
    if gap_only.contains(&true) {
        block
            .remove_columns(&gap_only)
            .wrap_err("Failed to remove gap-only columns")?;
    }

    let columns = block.columns();
    if block.rows().len() < 2 || columns < 2 {
        return Ok(());
    }

    let mut overhangs = vec![false; columns];

    let first = pattern(block, 0);
    let mut left_end = 0;
    if is_overhang(&first) {
        left_end = (0..columns)
            .find(|column| pattern(block, *column) != first)
            .unwrap_or(columns);
        overhangs[..left_end].fill(true);
    }

    let last = pattern(block, columns - 1);
    if is_overhang(&last) && left_end < columns {
        let right_start = (0..columns)
            .rev()
            .find(|column| pattern(block, *column) != last)
            .map_or(0, |column| column + 1);
        overhangs[right_start..].fill(true);
    }

    if overhangs.contains(&true) {
        block
            .remove_columns(&overhangs)
            .wrap_err("Failed to remove overhanging columns")?;
    }
    Ok(())
}
