//! Space-efficient sets of candidate digits.
//!
//! A cell's candidates are the digits not yet used in its row, column or
//! box. Nine digits fit in the low 9 bits of a `u16`; bit `d - 1` stands
//! for digit `d`. The set is always derived from the grid masks on demand,
//! it is never stored.

/// Set of digits 1..=9 backed by a 9-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DigitSet(u16);

impl DigitSet {
    pub const ALL: DigitSet = DigitSet(0o777);
    pub const NONE: DigitSet = DigitSet(0);

    /// Construct a set from a raw mask. Bits above the ninth are discarded.
    #[inline]
    pub fn from_bits(mask: u16) -> Self {
        DigitSet(mask & Self::ALL.0)
    }

    #[inline]
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn contains(self, num: u8) -> bool {
        debug_assert!((1..=9).contains(&num));
        self.0 & 1 << (num - 1) != 0
    }

    /// The digit in this set, if it holds exactly one.
    #[inline]
    pub fn unique(self) -> Option<u8> {
        if self.0.count_ones() == 1 {
            Some(self.0.trailing_zeros() as u8 + 1)
        } else {
            None
        }
    }

    /// Iterate the digits in ascending order.
    #[inline]
    pub fn iter(self) -> Digits {
        Digits(self.0)
    }
}

impl IntoIterator for DigitSet {
    type Item = u8;
    type IntoIter = Digits;

    fn into_iter(self) -> Digits {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`], ascending.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Digits(u16);

impl Iterator for Digits {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.0 == 0 {
            return None;
        }
        let num = self.0.trailing_zeros() as u8 + 1;
        self.0 &= self.0 - 1;
        Some(num)
    }
}
