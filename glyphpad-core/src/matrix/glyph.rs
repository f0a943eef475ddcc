//! Digit glyph table
//!
//! Each glyph is five row masks on a 5x5 grid. Bit 4 of a row is the
//! leftmost column, bit 0 the rightmost.

use crate::config::MATRIX_SIDE;

/// Bits a row mask may use
const ROW_MASK: u8 = (1 << MATRIX_SIDE) - 1;

/// A validated decimal digit (0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its numeric value
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Parse an ASCII digit character
    ///
    /// Anything outside '0'..='9' returns `None`.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Self::new(d as u8))
    }

    /// Numeric value
    pub const fn value(self) -> u8 {
        self.0
    }

    /// ASCII character for this digit
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// Bitmap for this digit
    pub const fn glyph(self) -> &'static Glyph {
        &GLYPHS[self.0 as usize]
    }
}

/// Fixed 5x5 bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    rows: [u8; MATRIX_SIDE],
}

impl Glyph {
    /// Build a glyph from row masks, top row first
    pub const fn from_rows(rows: [u8; MATRIX_SIDE]) -> Self {
        Self { rows }
    }

    /// Row masks, top row first
    pub const fn rows(&self) -> &[u8; MATRIX_SIDE] {
        &self.rows
    }

    /// Whether the cell at column `x`, row `y` is lit
    pub const fn is_set(&self, x: usize, y: usize) -> bool {
        if x >= MATRIX_SIDE || y >= MATRIX_SIDE {
            return false;
        }
        self.rows[y] & (1 << (MATRIX_SIDE - 1 - x)) != 0
    }

    /// True when no row uses bits outside the grid
    pub const fn is_well_formed(&self) -> bool {
        let mut y = 0;
        while y < MATRIX_SIDE {
            if self.rows[y] & !ROW_MASK != 0 {
                return false;
            }
            y += 1;
        }
        true
    }

    /// Number of lit cells
    pub const fn lit_count(&self) -> u32 {
        let mut count = 0;
        let mut y = 0;
        while y < MATRIX_SIDE {
            count += self.rows[y].count_ones();
            y += 1;
        }
        count
    }

    /// Lit cells as (column, row), row-major order
    pub fn lit_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..MATRIX_SIDE)
            .flat_map(|y| (0..MATRIX_SIDE).map(move |x| (x, y)))
            .filter(move |&(x, y)| self.is_set(x, y))
    }
}

/// Digit bitmaps, indexed by value
#[rustfmt::skip]
pub const GLYPHS: [Glyph; 10] = [
    // 0
    Glyph::from_rows([0b01110, 0b01010, 0b01010, 0b01010, 0b01110]),
    // 1
    Glyph::from_rows([0b01100, 0b00100, 0b00100, 0b00100, 0b01110]),
    // 2
    Glyph::from_rows([0b01110, 0b00010, 0b01110, 0b01000, 0b01110]),
    // 3
    Glyph::from_rows([0b01110, 0b00010, 0b00110, 0b00010, 0b01110]),
    // 4
    Glyph::from_rows([0b01010, 0b01010, 0b01110, 0b00010, 0b00010]),
    // 5
    Glyph::from_rows([0b01110, 0b01000, 0b01110, 0b00010, 0b01110]),
    // 6
    Glyph::from_rows([0b01110, 0b01000, 0b01110, 0b01010, 0b01110]),
    // 7
    Glyph::from_rows([0b01110, 0b00010, 0b00010, 0b00010, 0b00010]),
    // 8
    Glyph::from_rows([0b01110, 0b01010, 0b01110, 0b01010, 0b01110]),
    // 9
    Glyph::from_rows([0b01110, 0b01010, 0b01110, 0b00010, 0b01110]),
];

// Reject transcription errors at build time
const _: () = {
    let mut i = 0;
    while i < GLYPHS.len() {
        assert!(GLYPHS[i].is_well_formed(), "glyph row uses bits outside the 5x5 grid");
        assert!(GLYPHS[i].lit_count() > 0, "glyph is blank");
        i += 1;
    }
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_glyphs_well_formed() {
        for glyph in &GLYPHS {
            assert!(glyph.is_well_formed());
            assert_eq!(glyph.rows().len(), MATRIX_SIDE);
        }
    }

    #[test]
    fn test_glyphs_distinct() {
        for (i, a) in GLYPHS.iter().enumerate() {
            for b in &GLYPHS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_malformed_glyph_detected() {
        let bad = Glyph::from_rows([0b100000, 0, 0, 0, 0]);
        assert!(!bad.is_well_formed());
    }

    #[test]
    fn test_digit_from_char() {
        assert_eq!(Digit::from_char('0'), Digit::new(0));
        assert_eq!(Digit::from_char('9').map(Digit::value), Some(9));
        assert_eq!(Digit::from_char('a'), None);
        assert_eq!(Digit::from_char(' '), None);
        assert_eq!(Digit::from_char('\n'), None);
        assert_eq!(Digit::new(10), None);
    }

    #[test]
    fn test_as_char() {
        for value in 0..10 {
            let digit = Digit::new(value).unwrap();
            assert_eq!(Digit::from_char(digit.as_char()), Some(digit));
        }
    }

    #[test]
    fn test_glyph_cells_one() {
        let cells: heapless::Vec<(usize, usize), 25> = Digit::new(1)
            .unwrap()
            .glyph()
            .lit_cells()
            .collect();
        assert_eq!(
            cells.as_slice(),
            &[(1, 0), (2, 0), (2, 1), (2, 2), (2, 3), (1, 4), (2, 4), (3, 4)]
        );
    }

    #[test]
    fn test_lit_count_matches_cells() {
        for glyph in &GLYPHS {
            assert_eq!(glyph.lit_cells().count() as u32, glyph.lit_count());
        }
        assert_eq!(GLYPHS[8].lit_count(), 13);
    }

    #[test]
    fn test_out_of_grid_is_unset() {
        assert!(!GLYPHS[8].is_set(5, 0));
        assert!(!GLYPHS[8].is_set(0, 5));
    }
}
