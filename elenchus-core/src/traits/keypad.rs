//! Key source trait

use crate::keys::Key;

/// Source of decoded keypad events, polled once per engine loop cycle.
///
/// Implementations sample at a fixed rate and keep only the most recent
/// decode; the engine handles held-key suppression itself.
pub trait KeySource {
    /// Set the sampling rate in samples per second.
    fn set_poll_rate(&mut self, samples_per_s: u8);

    /// The most recent decoded key, or [`Key::NoSample`] if nothing new
    /// has been decoded since the last call.
    fn get_key(&mut self) -> Key;
}
