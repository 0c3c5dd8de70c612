#![cfg_attr(not(test), no_std)]

//! A platform agnostic driver for 4-digit multiplexed seven-segment displays
//! refreshed from a timer interrupt
//!
//! The display shows a 16-bit value as four hex digits, digit 0 being the
//! low nibble, plus one decimal point per digit. The digits share their
//! segment lines; each timer interrupt lights the next digit and re-arms the
//! 64-bit machine timer comparator for the following one.
//!
//! The platform provides the two GPIO ports ([`BytePort`], or [`PinPort`]
//! over embedded-hal pins), the machine timer ([`MachineTimer`]), the
//! interrupt status register ([`InterruptStatus`]) and the interrupt
//! controller ([`InterruptController`]).
//!
//! Example
//!
//! ```ignore
//!
//!#![no_main]
//!#![no_std]
//!
//!use multiplexed_segment_display::{Config, DisplayState, SevenSegDisplay, SharedDisplay};
//!
//!const CONFIG: Config = Config::new(board::TIMER_RESOLUTION, board::INT_TIMER);
//!
//!static STATE: DisplayState = DisplayState::new(CONFIG, 0xBEEF, 400);
//!static DISPLAY: SharedDisplay<board::Display> = SharedDisplay::new();
//!
//!fn timer_isr() {
//!    DISPLAY.on_interrupt();
//!}
//!
//!#[entry]
//!fn main() -> ! {
//!    let p = board::Peripherals::take();
//!
//!    let mut interrupts = p.interrupts;
//!
//!    DISPLAY.install(SevenSegDisplay::new(&STATE, p.gpio_p1, p.gpio_p0, p.mtime, p.mstatus));
//!    DISPLAY.with(|display| display.start_refresh(&mut interrupts, timer_isr));
//!
//!    let mut count = 0u16;
//!    loop {
//!        STATE.set_display_value(count, 0b0100);
//!        count = count.wrapping_add(1);
//!        board::delay_ms(100);
//!    }
//!}
//!
//! ```

pub mod config;
pub mod display;
pub mod encoding;
mod error;
pub mod interrupt;
pub mod port;
pub mod shared;
pub mod state;
pub mod timer;

pub use config::{Config, DIGIT_COUNT, MAX_FLICKER_FREE_HZ};
pub use display::{Refresh, SevenSegDisplay};
pub use encoding::{encode_hex, render, Frame};
pub use error::Error;
pub use interrupt::{Edge, Handler, InterruptController};
pub use port::{BytePort, PinPort};
pub use shared::SharedDisplay;
pub use state::DisplayState;
pub use timer::{InterruptStatus, MachineTimer};
