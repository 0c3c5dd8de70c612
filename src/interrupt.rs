//! Interrupt controller boundary

/// Signal edge an interrupt handler is triggered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    #[default]
    Rising,
    Falling,
}

/// Zero-argument interrupt service routine
pub type Handler = fn();

/// Attaches and detaches handlers to interrupt lines.
///
/// Implemented by the platform. Whether `detach` also drops an edge that
/// is already pending is up to the implementation.
pub trait InterruptController {
    /// Install `handler` on `line`, triggered on `edge`
    fn attach(&mut self, line: u8, handler: Handler, edge: Edge);

    /// Remove whatever handler is installed on `line`
    fn detach(&mut self, line: u8);
}
