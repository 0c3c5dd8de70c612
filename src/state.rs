//! Display contents shared between the application and the refresh interrupt

use core::sync::atomic::{AtomicU16, AtomicU32, AtomicU8, Ordering};

use crate::config::Config;
#[cfg(feature = "defmt")]
use crate::config::MAX_FLICKER_FREE_HZ;
use crate::encoding::next_index;
use crate::Error;

/// What the display shows and how fast it is multiplexed.
///
/// Meant to live in a `static`. Value and decimal points can be changed
/// from the main loop while the refresh interrupt is reading them. Each
/// field is loaded and stored whole, so a refresh step sees either the
/// old or the new value of a field, never a mix.
#[derive(Debug)]
pub struct DisplayState {
    config: Config,
    value: AtomicU16,
    dp_mask: AtomicU8,
    /// Only advanced by the refresh step, only cleared by `reset`
    index: AtomicU8,
    refresh_ticks: AtomicU32,
}

impl DisplayState {
    /// Create the state showing `value` without decimal points.
    ///
    /// # Panics
    ///
    /// Panics if `refresh_rate_hz` is 0. In a `static` initializer this is
    /// a compile time error.
    pub const fn new(config: Config, value: u16, refresh_rate_hz: u32) -> Self {
        Self {
            config,
            value: AtomicU16::new(value),
            dp_mask: AtomicU8::new(0),
            index: AtomicU8::new(0),
            refresh_ticks: AtomicU32::new(config.timer_resolution_hz / refresh_rate_hz),
        }
    }

    /// Set value, decimal points and refresh rate and restart at digit 0.
    ///
    /// An already armed timer keeps its deadline, the new rate applies from
    /// the next refresh step on. A zero rate is rejected and leaves the
    /// state untouched.
    pub fn reset(&self, value: u16, refresh_rate_hz: u32, dp_mask: u8) -> Result<(), Error> {
        let ticks = self
            .config
            .refresh_ticks(refresh_rate_hz)
            .ok_or(Error::ZeroRefreshRate)?;

        #[cfg(feature = "defmt")]
        if refresh_rate_hz > MAX_FLICKER_FREE_HZ {
            defmt::warn!(
                "refresh rate {} Hz above {} Hz may flicker",
                refresh_rate_hz,
                MAX_FLICKER_FREE_HZ
            );
        }

        self.value.store(value, Ordering::Relaxed);
        self.index.store(0, Ordering::Relaxed);
        self.dp_mask.store(dp_mask, Ordering::Relaxed);
        self.refresh_ticks.store(ticks, Ordering::Relaxed);
        Ok(())
    }

    /// Change what is shown. Cheap enough to call on every main loop pass.
    pub fn set_display_value(&self, value: u16, dp_mask: u8) {
        self.value.store(value, Ordering::Relaxed);
        self.dp_mask.store(dp_mask, Ordering::Relaxed);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn value(&self) -> u16 {
        self.value.load(Ordering::Relaxed)
    }

    pub fn dp_mask(&self) -> u8 {
        self.dp_mask.load(Ordering::Relaxed)
    }

    /// Digit rendered by the next refresh step
    pub fn index(&self) -> u8 {
        self.index.load(Ordering::Relaxed)
    }

    pub fn refresh_ticks(&self) -> u32 {
        self.refresh_ticks.load(Ordering::Relaxed)
    }

    pub(crate) fn advance(&self) {
        self.index.store(next_index(self.index()), Ordering::Relaxed);
    }
}
