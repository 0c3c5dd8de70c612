//! Driver configuration

use crate::interrupt::Edge;

/// Number of digits multiplexed by the driver.
pub const DIGIT_COUNT: u8 = 4;

/// Highest refresh rate that is recommended. Faster rates make the
/// display flicker.
pub const MAX_FLICKER_FREE_HZ: u32 = 400;

/// Platform specific settings of the refresh timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Ticks per second of the free running 64-bit timer
    pub timer_resolution_hz: u32,
    /// Interrupt line raised by the timer comparator
    pub timer_interrupt: u8,
    /// Edge the refresh handler is attached on
    pub trigger: Edge,
}

impl Config {
    /// Create a configuration triggering on the rising edge
    pub const fn new(timer_resolution_hz: u32, timer_interrupt: u8) -> Self {
        Self {
            timer_resolution_hz,
            timer_interrupt,
            trigger: Edge::Rising,
        }
    }

    pub const fn with_trigger(mut self, trigger: Edge) -> Self {
        self.trigger = trigger;
        self
    }

    /// Timer ticks between two digit advances at `refresh_rate_hz`.
    ///
    /// Returns `None` for a zero refresh rate.
    pub const fn refresh_ticks(&self, refresh_rate_hz: u32) -> Option<u32> {
        self.timer_resolution_hz.checked_div(refresh_rate_hz)
    }
}
