//! Byte-wide GPIO output ports

use embedded_hal::digital::v2::OutputPin;

/// A byte-wide output port, e.g. a memory mapped GPIO register.
///
/// The driver uses one port for the one-hot digit select and one for the
/// segment pattern plus decimal point.
pub trait BytePort {
    type Error;

    fn write(&mut self, byte: u8) -> Result<(), Self::Error>;
}

/// Drives up to 8 individual pins as one port. Pin `n` follows bit `n`.
pub struct PinPort<PIN, const N: usize> {
    pins: [PIN; N],
    /// If true, a set bit drives the pin low
    active_low: bool,
}

impl<PIN, const N: usize> PinPort<PIN, N>
where
    PIN: OutputPin,
{
    /// Port where a set bit drives the pin high
    pub fn new(pins: [PIN; N]) -> Self {
        Self {
            pins,
            active_low: false,
        }
    }

    /// Port where a set bit drives the pin low, for common anode digits or
    /// PNP digit drivers
    pub fn new_active_low(pins: [PIN; N]) -> Self {
        Self {
            pins,
            active_low: true,
        }
    }

    /// Release the pins
    pub fn release(self) -> [PIN; N] {
        self.pins
    }
}

impl<PIN, const N: usize> BytePort for PinPort<PIN, N>
where
    PIN: OutputPin,
{
    type Error = PIN::Error;

    fn write(&mut self, byte: u8) -> Result<(), Self::Error> {
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            let set = bit < 8 && byte & (1 << bit) != 0;

            if set != self.active_low {
                pin.set_high()?;
            } else {
                pin.set_low()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    #[derive(Debug, Default)]
    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        type Error = Infallible;

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }
    }

    struct BrokenPin;

    impl OutputPin for BrokenPin {
        type Error = ();

        fn set_high(&mut self) -> Result<(), Self::Error> {
            Err(())
        }

        fn set_low(&mut self) -> Result<(), Self::Error> {
            Err(())
        }
    }

    fn levels<const N: usize>(port: PinPort<MockPin, N>) -> [bool; N] {
        port.release().map(|pin| pin.high)
    }

    #[test]
    fn test_active_high_port() {
        let mut port = PinPort::new(<[MockPin; 8]>::default());
        port.write(0b1000_0101).unwrap();
        assert_eq!(
            levels(port),
            [true, false, true, false, false, false, false, true]
        );
    }

    #[test]
    fn test_active_low_port() {
        let mut port = PinPort::new_active_low(<[MockPin; 4]>::default());
        port.write(0b0010).unwrap();
        assert_eq!(levels(port), [true, false, true, true]);
    }

    #[test]
    fn test_narrow_port_ignores_high_bits() {
        let mut port = PinPort::new(<[MockPin; 4]>::default());
        port.write(0xF1).unwrap();
        assert_eq!(levels(port), [true, false, false, false]);
    }

    #[test]
    fn test_pin_error_is_propagated() {
        let mut port = PinPort::new([BrokenPin, BrokenPin]);
        assert_eq!(port.write(0x01), Err(()));
    }
}
