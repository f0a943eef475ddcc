//! Linear pixel buffer in strip order

use smart_leds::RGB8;

/// Unlit pixel
pub const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Fixed-length frame, one colour per LED in physical order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer<const N: usize> {
    pixels: [RGB8; N],
}

impl<const N: usize> PixelBuffer<N> {
    /// All-black buffer
    pub const fn new() -> Self {
        Self { pixels: [BLACK; N] }
    }

    /// Number of pixels
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Set every pixel to black
    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    pub fn fill(&mut self, color: RGB8) {
        self.pixels = [color; N];
    }

    /// Write one pixel; returns false if `index` is out of range
    pub fn set(&mut self, index: usize, color: RGB8) -> bool {
        match self.pixels.get_mut(index) {
            Some(pixel) => {
                *pixel = color;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<RGB8> {
        self.pixels.get(index).copied()
    }

    /// Indices of non-black pixels
    pub fn lit_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, p)| **p != BLACK)
            .map(|(i, _)| i)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RGB8> {
        self.pixels.iter()
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
