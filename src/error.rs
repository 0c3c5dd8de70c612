use core::convert::Infallible;

/// Driver errors
///
/// The type parameters are the error types of the digit-select and the
/// segment port. Configuration errors don't involve any port and use the
/// infallible defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<SelectError = Infallible, SegmentError = Infallible> {
    /// Writing the digit-select port failed
    Select(SelectError),
    /// Writing the segment port failed
    Segments(SegmentError),
    /// A refresh rate of 0 Hz was requested
    ZeroRefreshRate,
}

impl<SelectError, SegmentError> Error<SelectError, SegmentError> {
    /// Short description for logging without requiring the port errors to
    /// be printable.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Select(_) => "digit select write failed",
            Error::Segments(_) => "segment write failed",
            Error::ZeroRefreshRate => "zero refresh rate",
        }
    }
}
