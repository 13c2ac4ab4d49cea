// clock.rs - Shared countdown that paces generations against the frame rate

/// Frames skipped between two generations
pub const ANIMATION_COUNTDOWN: u32 = 4;

/// Countdown shared by every cell of one board.
///
/// Each frame ticks it once. While it is nonzero the tick only decrements, so a
/// full cycle is `ANIMATION_COUNTDOWN` quiet frames followed by one frame that
/// fires and rewinds the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationClock {
    countdown : u32,
    period    : u32,
}

impl Default for GenerationClock {
    fn default() -> Self {
        Self::new(ANIMATION_COUNTDOWN)
    }
}

impl GenerationClock {
    pub fn new(period: u32) -> Self {
        Self { countdown: period, period }
    }

    /// Advance one frame. Returns true when a generation is due.
    pub fn tick(&mut self) -> bool {
        if self.countdown != 0 {
            self.countdown -= 1;
            return false;
        }
        self.countdown = self.period;
        true
    }

    /// Push the next generation back by a full cycle
    pub fn reset(&mut self) {
        self.countdown = self.period;
    }

    pub fn remaining(&self) -> u32 {
        self.countdown
    }

    pub fn period(&self) -> u32 {
        self.period
    }
}
