//! Engine configuration type definitions
//!
//! All tunables live in one place so test engines and the firmware can
//! share defaults. Nothing here is persisted; the device resets to the
//! defaults on power-cycle.

/// Navigation engine tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EngineConfig {
    /// Sampling rate handed to the key source at startup.
    pub samples_per_s: u8,
    /// Span in seconds the SELECT repeat window covers while the
    /// repeat toggle is on.
    pub repeat_window_s: u8,
    /// Row-0 banner shown during startup.
    pub banner: &'static str,
    /// How long the banner stays up before polling begins (ms).
    pub banner_hold_ms: u32,
    /// Idle heartbeat pulse width (ms).
    pub heartbeat_pulse_ms: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            samples_per_s: 10,
            repeat_window_s: 5,
            banner: "In-Circuit Test",
            banner_hold_ms: 2000,
            heartbeat_pulse_ms: 100,
        }
    }
}
