//! The 81-cell board with derived constraint masks.

use std::fmt;

use crate::digit_set::DigitSet;
use crate::types::{Entry, Unsolvable};

/// A 9×9 sudoku board.
///
/// Stores the 81 cell values (`0` = empty) together with one 9-bit
/// used-digit mask per row, column and box. The masks are updated in the
/// same operation as the value on every placement and every removal, so
/// that candidate sets can be derived with three lookups and no scan.
///
/// A `Grid` never holds two equal digits in the same row, column or box;
/// [`place`](Grid::place) refuses the placement instead.
#[derive(Clone, Copy)]
pub struct Grid {
    values: [u8; 81],
    row_used: [u16; 9],
    col_used: [u16; 9],
    box_used: [u16; 9],
    n_empty: u8,
}

impl Grid {
    /// An all-empty grid.
    pub(crate) fn empty() -> Grid {
        Grid {
            values: [0; 81],
            row_used: [0; 9],
            col_used: [0; 9],
            box_used: [0; 9],
            n_empty: 81,
        }
    }

    /// Build a grid from 81 cell values in `0..=9`.
    ///
    /// Fails if two givens conflict. Values must already be range-checked;
    /// the facade does that before calling in here.
    pub(crate) fn from_givens(values: &[u8; 81]) -> Result<Grid, Unsolvable> {
        let mut grid = Grid::empty();
        for (cell, &num) in values.iter().enumerate() {
            debug_assert!(num <= 9);
            if num != 0 {
                grid.place(Entry { cell: cell as u8, num })?;
            }
        }
        Ok(grid)
    }

    /// Place `entry.num` in `entry.cell`.
    ///
    /// Fails without touching the grid if the digit is already used in the
    /// cell's row, column or box, or if the cell is occupied.
    pub(crate) fn place(&mut self, entry: Entry) -> Result<(), Unsolvable> {
        let mask = entry.mask();
        let used =
            self.row_used[entry.row()] | self.col_used[entry.col()] | self.box_used[entry.box_()];
        if used & mask != 0 || self.values[entry.cell()] != 0 {
            return Err(Unsolvable);
        }

        self.values[entry.cell()] = entry.num;
        self.row_used[entry.row()] |= mask;
        self.col_used[entry.col()] |= mask;
        self.box_used[entry.box_()] |= mask;
        self.n_empty -= 1;
        Ok(())
    }

    /// Remove the digit placed in `cell`, inverse of [`place`](Grid::place).
    ///
    /// Callers must only unplace cells they placed themselves, in reverse
    /// order of placement. The search trail enforces this.
    pub(crate) fn unplace(&mut self, cell: u8) {
        let num = self.values[cell as usize];
        debug_assert!(num != 0);
        let entry = Entry { cell, num };
        let mask = entry.mask();

        self.values[entry.cell()] = 0;
        self.row_used[entry.row()] &= !mask;
        self.col_used[entry.col()] &= !mask;
        self.box_used[entry.box_()] &= !mask;
        self.n_empty += 1;
    }

    /// Digits still possible in `cell`. Meaningless for occupied cells.
    #[inline]
    pub(crate) fn candidates(&self, cell: u8) -> DigitSet {
        let cell = cell as usize;
        let used = self.row_used[cell / 9]
            | self.col_used[cell % 9]
            | self.box_used[crate::positions::box_of(cell)];
        DigitSet::from_bits(!used)
    }

    #[inline]
    pub(crate) fn row_used(&self, row: usize) -> DigitSet {
        DigitSet::from_bits(self.row_used[row])
    }

    #[inline]
    pub(crate) fn col_used(&self, col: usize) -> DigitSet {
        DigitSet::from_bits(self.col_used[col])
    }

    #[inline]
    pub(crate) fn box_used(&self, box_: usize) -> DigitSet {
        DigitSet::from_bits(self.box_used[box_])
    }

    #[inline]
    pub(crate) fn get(&self, cell: u8) -> u8 {
        self.values[cell as usize]
    }

    /// Cells that are still empty, ascending.
    pub(crate) fn empty_cells(&self) -> impl Iterator<Item = u8> + '_ {
        (0..81).filter(move |&cell| self.values[cell as usize] == 0)
    }

    /// Whether all 81 cells are filled.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.n_empty == 0
    }

    #[inline]
    pub(crate) fn n_empty(&self) -> u8 {
        self.n_empty
    }

    /// The cell values, row-major, `0` for empty.
    pub fn values(&self) -> &[u8; 81] {
        &self.values
    }

    /// Copy of the cell values for handing across the engine boundary.
    pub fn to_bytes(&self) -> [u8; 81] {
        self.values
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row % 3 == 0 {
                writeln!(f, "+---------+---------+---------+")?;
            }
            for col in 0..9 {
                if col % 3 == 0 {
                    write!(f, "|")?;
                }
                match self.values[row * 9 + col] {
                    0 => write!(f, " _ ")?,
                    num => write!(f, " {} ", num)?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "+---------+---------+---------+")
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
