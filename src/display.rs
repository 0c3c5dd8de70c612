//! The timer driven multiplexing engine

use crate::encoding::{self, Frame};
use crate::interrupt::{Handler, InterruptController};
use crate::port::BytePort;
use crate::state::DisplayState;
use crate::timer::{self, InterruptStatus, MachineTimer};
use crate::Error;

/// Something serviced from the refresh timer interrupt
pub trait Refresh {
    fn on_timer_interrupt(&mut self);
}

/// Multiplexes a 4-digit seven-segment display from a timer interrupt.
///
/// Every refresh step lights one digit and programs the timer comparator
/// to fire again `refresh_ticks` later. The timer is a one-shot that
/// re-arms itself from the current time, so interrupt latency never adds
/// up into drift.
pub struct SevenSegDisplay<'a, SEL, SEG, TIM, ST> {
    state: &'a DisplayState,
    select: SEL,
    segments: SEG,
    timer: TIM,
    status: ST,
}

impl<'a, SEL, SEG, TIM, ST> SevenSegDisplay<'a, SEL, SEG, TIM, ST>
where
    SEL: BytePort,
    SEG: BytePort,
    TIM: MachineTimer,
    ST: InterruptStatus,
{
    /// Create a new SevenSegDisplay showing `state`
    pub fn new(state: &'a DisplayState, select: SEL, segments: SEG, timer: TIM, status: ST) -> Self {
        Self {
            state,
            select,
            segments,
            timer,
            status,
        }
    }

    /// Release the SevenSegDisplay and the resources
    pub fn release(self) -> (SEL, SEG, TIM, ST) {
        (self.select, self.segments, self.timer, self.status)
    }

    pub fn state(&self) -> &'a DisplayState {
        self.state
    }

    /// Render the current digit, move on to the next one and re-arm the
    /// timer.
    ///
    /// A failed port write is reported only after the digit index has
    /// advanced and the timer is armed again, so the display keeps running.
    pub fn refresh(&mut self) -> Result<(), Error<SEL::Error, SEG::Error>> {
        let frame = encoding::render(
            self.state.value(),
            self.state.dp_mask(),
            self.state.index(),
        );

        let written = self.write_frame(frame);

        self.state.advance();
        self.schedule_next();

        written
    }

    /// Program the comparator one refresh interval from now
    pub fn schedule_next(&mut self) {
        timer::advance(
            &mut self.timer,
            &mut self.status,
            self.state.refresh_ticks(),
        );
    }

    /// Arm the timer and install `handler` on the timer interrupt.
    ///
    /// `handler` must end up calling [`Refresh::on_timer_interrupt`], usually
    /// through [`SharedDisplay::on_interrupt`](crate::SharedDisplay::on_interrupt).
    /// Calling this twice without `stop_refresh` in between attaches the
    /// handler twice, with platform defined results.
    pub fn start_refresh<IC>(&mut self, interrupts: &mut IC, handler: Handler)
    where
        IC: InterruptController,
    {
        let config = *self.state.config();

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "seven-segment refresh every {} ticks on irq {}",
            self.state.refresh_ticks(),
            config.timer_interrupt
        );

        self.schedule_next();
        interrupts.attach(config.timer_interrupt, handler, config.trigger);
    }

    /// Remove the refresh handler.
    ///
    /// The comparator stays programmed, one more timer interrupt may still
    /// be raised after this returns.
    pub fn stop_refresh<IC>(&mut self, interrupts: &mut IC)
    where
        IC: InterruptController,
    {
        let line = self.state.config().timer_interrupt;

        #[cfg(feature = "defmt")]
        defmt::debug!("seven-segment refresh stopped on irq {}", line);

        interrupts.detach(line);
    }

    /// Turn all digits and segments off
    pub fn blank(&mut self) -> Result<(), Error<SEL::Error, SEG::Error>> {
        self.write_frame(Frame {
            select: 0,
            segments: 0,
        })
    }

    fn write_frame(&mut self, frame: Frame) -> Result<(), Error<SEL::Error, SEG::Error>> {
        self.select.write(frame.select).map_err(Error::Select)?;
        self.segments.write(frame.segments).map_err(Error::Segments)?;
        Ok(())
    }
}

impl<SEL, SEG, TIM, ST> Refresh for SevenSegDisplay<'_, SEL, SEG, TIM, ST>
where
    SEL: BytePort,
    SEG: BytePort,
    TIM: MachineTimer,
    ST: InterruptStatus,
{
    fn on_timer_interrupt(&mut self) {
        if let Err(_err) = self.refresh() {
            #[cfg(feature = "defmt")]
            defmt::warn!("seven-segment refresh: {}", _err.kind());
        }
    }
}
