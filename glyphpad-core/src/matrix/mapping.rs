//! Serpentine coordinate mapping
//!
//! The strip enters the panel at the bottom-right corner and snakes back
//! and forth, so row 0 (top) holds the highest indices. Even rows run
//! right-to-left in index order, odd rows left-to-right.

use crate::config::MATRIX_SIDE;

/// Serpentine layout for a `SIDE` x `SIDE` panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerpentineMap<const SIDE: usize>;

/// Layout of the digit matrix
pub type MatrixMap = SerpentineMap<MATRIX_SIDE>;

impl<const SIDE: usize> SerpentineMap<SIDE> {
    /// Number of cells on the panel
    pub const LEN: usize = SIDE * SIDE;

    /// Buffer index for column `x`, row `y`
    pub const fn index(x: usize, y: usize) -> Option<usize> {
        if x >= SIDE || y >= SIDE {
            return None;
        }
        let column = if y % 2 == 0 { x } else { SIDE - 1 - x };
        Some(Self::LEN - 1 - (y * SIDE + column))
    }

    /// Column and row for a buffer index
    pub const fn coords(index: usize) -> Option<(usize, usize)> {
        if index >= Self::LEN {
            return None;
        }
        let position = Self::LEN - 1 - index;
        let y = position / SIDE;
        let offset = position % SIDE;
        let x = if y % 2 == 0 { offset } else { SIDE - 1 - offset };
        Some((x, y))
    }
}
