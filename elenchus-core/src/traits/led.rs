//! Status LED trait

/// Indicator LED the engine pulses as an idle heartbeat.
pub trait StatusLed {
    /// Turn the LED on or off.
    fn set_on(&mut self, on: bool);

    /// Check if the LED is currently on.
    fn is_on(&self) -> bool;
}
