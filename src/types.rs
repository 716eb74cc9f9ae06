use crate::positions::box_of;

/// Signal that the current line of search cannot lead to a solution.
///
/// This is raised on conflicting placements and during propagation when a
/// cell or unit runs out of candidates. It is always recovered by unwinding
/// and never crosses the crate boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Unsolvable;

/// A digit placed (or about to be placed) in a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Entry {
    pub cell: u8,
    pub num: u8,
}

impl Entry {
    #[inline]
    pub fn cell(self) -> usize {
        self.cell as usize
    }

    #[inline]
    pub fn row(self) -> usize {
        self.cell as usize / 9
    }

    #[inline]
    pub fn col(self) -> usize {
        self.cell as usize % 9
    }

    #[inline]
    pub fn box_(self) -> usize {
        box_of(self.cell as usize)
    }

    /// Mask with only this entry's digit bit set.
    #[inline]
    pub fn mask(self) -> u16 {
        1 << (self.num - 1)
    }
}
