use embedded_hal::digital::OutputPin;

use super::switches::Polarity;

/// An LED on one output pin. Remembers whether it is lit so repeated
/// `on`/`off` calls don't touch the pin.
pub struct Led<P> {
    pin: P,
    polarity: Polarity,
    lit: bool,
}

impl<P> Led<P>
where
    P: OutputPin,
{
    /// Takes the pin and drives the LED off.
    pub fn new(pin: P, polarity: Polarity) -> Result<Self, P::Error> {
        let mut led = Self {
            pin,
            polarity,
            lit: true,
        };
        led.off()?;
        Ok(led)
    }

    pub fn is_on(&self) -> bool {
        self.lit
    }

    pub fn on(&mut self) -> Result<(), P::Error> {
        if self.lit {
            return Ok(());
        }
        self.drive(true)
    }

    pub fn off(&mut self) -> Result<(), P::Error> {
        if !self.lit {
            return Ok(());
        }
        self.drive(false)
    }

    pub fn toggle(&mut self) -> Result<(), P::Error> {
        self.drive(!self.lit)
    }

    fn drive(&mut self, lit: bool) -> Result<(), P::Error> {
        if lit == self.polarity.level() {
            self.pin.set_high()?;
        } else {
            self.pin.set_low()?;
        }
        self.lit = lit;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use core::cell::Cell;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Output pin that records its level and how often it was written.
    pub(crate) struct FakePin<'a> {
        pub high: &'a Cell<bool>,
        pub writes: &'a Cell<u32>,
    }

    impl ErrorType for FakePin<'_> {
        type Error = Infallible;
    }

    impl OutputPin for FakePin<'_> {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high.set(false);
            self.writes.set(self.writes.get() + 1);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high.set(true);
            self.writes.set(self.writes.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn starts_off() {
        let high = Cell::new(false);
        let writes = Cell::new(0);
        let led = Led::new(
            FakePin {
                high: &high,
                writes: &writes,
            },
            Polarity::ActiveLow,
        )
        .unwrap();
        assert!(!led.is_on());
        assert!(high.get());
        assert_eq!(writes.get(), 1);
    }

    #[test]
    fn active_low_levels() {
        let high = Cell::new(false);
        let writes = Cell::new(0);
        let mut led = Led::new(
            FakePin {
                high: &high,
                writes: &writes,
            },
            Polarity::ActiveLow,
        )
        .unwrap();
        led.on().unwrap();
        assert!(led.is_on());
        assert!(!high.get());
        led.off().unwrap();
        assert!(high.get());
    }

    #[test]
    fn active_high_levels() {
        let high = Cell::new(true);
        let writes = Cell::new(0);
        let mut led = Led::new(
            FakePin {
                high: &high,
                writes: &writes,
            },
            Polarity::ActiveHigh,
        )
        .unwrap();
        assert!(!high.get());
        led.on().unwrap();
        assert!(high.get());
    }

    #[test]
    fn on_and_off_are_idempotent() {
        let high = Cell::new(false);
        let writes = Cell::new(0);
        let mut led = Led::new(
            FakePin {
                high: &high,
                writes: &writes,
            },
            Polarity::ActiveHigh,
        )
        .unwrap();
        led.off().unwrap();
        assert_eq!(writes.get(), 1);
        led.on().unwrap();
        led.on().unwrap();
        assert_eq!(writes.get(), 2);
    }

    #[test]
    fn toggle_flips() {
        let high = Cell::new(false);
        let writes = Cell::new(0);
        let mut led = Led::new(
            FakePin {
                high: &high,
                writes: &writes,
            },
            Polarity::ActiveHigh,
        )
        .unwrap();
        led.toggle().unwrap();
        assert!(led.is_on());
        assert!(high.get());
        led.toggle().unwrap();
        assert!(!led.is_on());
        assert!(!high.get());
    }
}
