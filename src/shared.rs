//! Handing the display to a zero-argument interrupt handler

use core::cell::RefCell;

use critical_section::Mutex;

use crate::display::Refresh;

/// Interrupt-safe home for a display, meant to be a `static`.
///
/// ```ignore
/// static DISPLAY: SharedDisplay<MyDisplay> = SharedDisplay::new();
///
/// fn on_timer() {
///     DISPLAY.on_interrupt();
/// }
/// ```
pub struct SharedDisplay<D>(Mutex<RefCell<Option<D>>>);

impl<D> SharedDisplay<D> {
    pub const fn new() -> Self {
        Self(Mutex::new(RefCell::new(None)))
    }

    /// Store `display`, returning the one installed before, if any
    pub fn install(&self, display: D) -> Option<D> {
        critical_section::with(|cs| self.0.borrow(cs).replace(Some(display)))
    }

    /// Remove the display, e.g. to release its peripherals
    pub fn take(&self) -> Option<D> {
        critical_section::with(|cs| self.0.borrow(cs).take())
    }

    /// Run `f` on the display inside a critical section.
    ///
    /// Returns `None` if no display is installed.
    pub fn with<R>(&self, f: impl FnOnce(&mut D) -> R) -> Option<R> {
        critical_section::with(|cs| self.0.borrow(cs).borrow_mut().as_mut().map(f))
    }
}

impl<D: Refresh> SharedDisplay<D> {
    /// Body of the timer interrupt handler. Does nothing until a display
    /// is installed.
    pub fn on_interrupt(&self) {
        self.with(D::on_timer_interrupt);
    }
}

impl<D> Default for SharedDisplay<D> {
    fn default() -> Self {
        Self::new()
    }
}
