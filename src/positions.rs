//! Cell indexing helpers for the row-major 81-cell grid.
//!
//! Rows, columns and boxes are numbered 0..9. Box numbering goes left to
//! right, top to bottom, so `box_of` for the center cell (40) is 4.

#[inline]
pub(crate) fn box_of(cell: usize) -> usize {
    cell / 27 * 3 + cell % 9 / 3
}

#[inline]
pub(crate) fn cells_of_row(row: usize) -> impl Iterator<Item = u8> {
    (row * 9..row * 9 + 9).map(|cell| cell as u8)
}

#[inline]
pub(crate) fn cells_of_col(col: usize) -> impl Iterator<Item = u8> {
    (0..9).map(move |row| (row * 9 + col) as u8)
}

#[inline]
pub(crate) fn cells_of_box(box_: usize) -> impl Iterator<Item = u8> {
    let first = box_ / 3 * 27 + box_ % 3 * 3;
    (0..9).map(move |i| (first + i / 3 * 9 + i % 3) as u8)
}
