//! Signal-generator channel allocation
//!
//! The RP2040 has two PIO blocks with four state machines each. Channels
//! are claimed from the primary bank first and fall back to the secondary
//! one. A claim hands out an owned [`ChannelHandle`]; the only way to free
//! the channel is to give the handle back.

/// Banks tracked by the arena
pub const BANK_COUNT: usize = 2;

/// Channels per bank
pub const CHANNELS_PER_BANK: u8 = 4;

const FULL_MASK: u8 = (1 << CHANNELS_PER_BANK) - 1;

/// Errors from claiming a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClaimError {
    /// Every channel in every bank is taken
    Exhausted,
    /// Bank index out of range
    NoSuchBank,
}

/// Exclusive right to one channel
///
/// Deliberately not `Clone` or `Copy`.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelHandle {
    bank: u8,
    index: u8,
}

impl ChannelHandle {
    /// 0 for the primary bank, 1 for the fallback
    pub fn bank(&self) -> u8 {
        self.bank
    }

    /// Channel number within the bank
    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn is_fallback(&self) -> bool {
        self.bank != 0
    }
}

/// Free-channel bookkeeping for both banks
#[derive(Debug, Clone)]
pub struct ChannelArena {
    /// Bit n set = channel n free
    free: [u8; BANK_COUNT],
}

impl ChannelArena {
    /// Arena with every channel free
    pub const fn new() -> Self {
        Self {
            free: [FULL_MASK; BANK_COUNT],
        }
    }

    /// Arena with only the channels in each mask available
    ///
    /// Used when some channels are reserved elsewhere or when only part of a
    /// bank is wired up.
    pub const fn with_free_masks(masks: [u8; BANK_COUNT]) -> Self {
        Self {
            free: [masks[0] & FULL_MASK, masks[1] & FULL_MASK],
        }
    }

    /// Claim the lowest free channel, primary bank first
    pub fn claim(&mut self) -> Result<ChannelHandle, ClaimError> {
        for bank in 0..BANK_COUNT as u8 {
            if let Ok(handle) = self.claim_from(bank) {
                return Ok(handle);
            }
        }
        Err(ClaimError::Exhausted)
    }

    /// Claim the lowest free channel of a specific bank
    pub fn claim_from(&mut self, bank: u8) -> Result<ChannelHandle, ClaimError> {
        let free = self
            .free
            .get_mut(bank as usize)
            .ok_or(ClaimError::NoSuchBank)?;
        if *free == 0 {
            return Err(ClaimError::Exhausted);
        }
        let index = free.trailing_zeros() as u8;
        *free &= !(1 << index);
        Ok(ChannelHandle { bank, index })
    }

    /// Return a channel to the pool
    pub fn release(&mut self, handle: ChannelHandle) {
        self.free[handle.bank as usize] |= 1 << handle.index;
    }

    /// Free channels in a bank
    pub fn available(&self, bank: u8) -> u32 {
        self.free
            .get(bank as usize)
            .map_or(0, |mask| mask.count_ones())
    }
}

impl Default for ChannelArena {
    fn default() -> Self {
        Self::new()
    }
}
