//! GPIO status LED
//!
//! Heartbeat indicator driven from a GPIO pin (directly or through a
//! transistor). The pin can be configured as active-high (default) or
//! active-low.

use elenchus_core::traits::StatusLed;
use embedded_hal::digital::OutputPin;

/// Status LED on a GPIO pin.
pub struct GpioLed<P> {
    pin: P,
    /// If true, LED ON = pin LOW
    inverted: bool,
    /// Current logical state (true = LED on)
    on: bool,
}

impl<P: OutputPin> GpioLed<P> {
    /// Create a new GPIO LED.
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to drive
    /// - `inverted`: If true, LED is ON when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut led = Self {
            pin,
            inverted,
            on: false,
        };
        // Ensure the LED starts off
        led.set_on(false);
        led
    }

    /// Create a new GPIO LED with active-high output.
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a new GPIO LED with active-low output.
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: OutputPin> StatusLed for GpioLed<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;

        if on != self.inverted {
            let _ = self.pin.set_high();
        } else {
            let _ = self.pin.set_low();
        }
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: false }
        }
    }

    impl embedded_hal::digital::ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    #[test]
    fn active_high_led() {
        let mut led = GpioLed::new_active_high(MockPin::new());

        assert!(!led.is_on());
        assert!(!led.pin.high);

        led.set_on(true);
        assert!(led.is_on());
        assert!(led.pin.high);

        led.set_on(false);
        assert!(!led.is_on());
        assert!(!led.pin.high);
    }

    #[test]
    fn active_low_led() {
        let mut led = GpioLed::new_active_low(MockPin::new());

        // Off means the pin rests high for active-low wiring.
        assert!(!led.is_on());
        assert!(led.pin.high);

        led.set_on(true);
        assert!(led.is_on());
        assert!(!led.pin.high);

        led.set_on(false);
        assert!(!led.is_on());
        assert!(led.pin.high);
    }
}
