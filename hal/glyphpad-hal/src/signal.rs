//! Bit-serial signal generator abstraction
//!
//! A signal channel is one hardware waveform generator (an RP2040 PIO state
//! machine, for example) that shifts words out on a pin with precise timing,
//! independent of the CPU.

/// One claimed channel of a programmable signal generator
///
/// The generator has a small internal queue. Backpressure comes from the
/// hardware: [`put_blocking`](Self::put_blocking) does not return until the
/// queue has accepted the word.
pub trait SignalChannel {
    /// Queue one 8-bit word for transmission, MSB first
    fn put_blocking(&mut self, word: u8);

    /// Queue a run of words in order
    fn put_all(&mut self, words: &[u8]) {
        for &word in words {
            self.put_blocking(word);
        }
    }
}
