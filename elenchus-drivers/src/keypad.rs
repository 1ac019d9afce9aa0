//! Sampled keypad
//!
//! Implements the key-source pacing contract over an electrical decoder
//! seam: between sample slots callers get [`Key::NoSample`], at each
//! slot they get the most recent decode. Nothing is buffered beyond
//! that; held-key suppression is the engine's job.

use elenchus_core::keys::Key;
use elenchus_core::traits::{KeySource, Monotonic};

/// Default sampling rate in samples per second.
pub const DEFAULT_SAMPLES_PER_S: u8 = 10;

/// Raw key-level decoder.
///
/// Implementations read whatever the board wires up (GPIO buttons, an
/// ADC ladder) and report the key currently held, or [`Key::None`] when
/// idle. They never return [`Key::NoSample`]; pacing belongs to
/// [`SampledKeypad`].
pub trait RawKeypad {
    fn read(&mut self) -> Key;
}

/// Key source that paces raw decodes at a fixed sample rate.
pub struct SampledKeypad<R, C> {
    raw: R,
    clock: C,
    period_ms: u32,
    next_sample_ms: u64,
}

impl<R: RawKeypad, C: Monotonic> SampledKeypad<R, C> {
    /// New sampler at [`DEFAULT_SAMPLES_PER_S`]; the first call samples
    /// immediately.
    pub fn new(raw: R, clock: C) -> Self {
        Self {
            raw,
            clock,
            period_ms: 1000 / u32::from(DEFAULT_SAMPLES_PER_S),
            next_sample_ms: 0,
        }
    }
}

impl<R: RawKeypad, C: Monotonic> KeySource for SampledKeypad<R, C> {
    fn set_poll_rate(&mut self, samples_per_s: u8) {
        // Clamp so a zero rate still samples rather than stalling.
        let sps = samples_per_s.max(1);
        self.period_ms = 1000 / u32::from(sps);
        self.next_sample_ms = 0;
    }

    fn get_key(&mut self) -> Key {
        let now = self.clock.now_ms();
        if now < self.next_sample_ms {
            return Key::NoSample;
        }
        self.next_sample_ms = now + u64::from(self.period_ms);
        self.raw.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// Clock under direct test control.
    struct ManualClock {
        now: Cell<u64>,
    }

    impl ManualClock {
        fn new() -> Self {
            Self { now: Cell::new(0) }
        }

        fn advance(&self, ms: u64) {
            self.now.set(self.now.get() + ms);
        }
    }

    impl Monotonic for ManualClock {
        fn now_ms(&self) -> u64 {
            self.now.get()
        }

        fn delay_ms(&mut self, ms: u32) {
            self.advance(u64::from(ms));
        }
    }

    /// Decoder pinned to one key level.
    struct HeldKey(Key);

    impl RawKeypad for HeldKey {
        fn read(&mut self) -> Key {
            self.0
        }
    }

    #[test]
    fn first_call_samples_immediately() {
        let mut keypad = SampledKeypad::new(HeldKey(Key::Select), ManualClock::new());
        assert_eq!(keypad.get_key(), Key::Select);
    }

    #[test]
    fn calls_inside_the_period_get_no_sample() {
        let clock = ManualClock::new();
        let mut keypad = SampledKeypad::new(HeldKey(Key::Left), clock);
        assert_eq!(keypad.get_key(), Key::Left);

        keypad.clock.advance(40);
        assert_eq!(keypad.get_key(), Key::NoSample);
        keypad.clock.advance(40);
        assert_eq!(keypad.get_key(), Key::NoSample);

        // 100 ms period at the default 10 samples/s.
        keypad.clock.advance(20);
        assert_eq!(keypad.get_key(), Key::Left);
    }

    #[test]
    fn sample_slots_track_the_latest_decode() {
        let clock = ManualClock::new();
        let mut keypad = SampledKeypad::new(HeldKey(Key::Left), clock);
        assert_eq!(keypad.get_key(), Key::Left);

        keypad.raw = HeldKey(Key::None);
        keypad.clock.advance(100);
        assert_eq!(keypad.get_key(), Key::None);

        keypad.raw = HeldKey(Key::Right);
        keypad.clock.advance(100);
        assert_eq!(keypad.get_key(), Key::Right);
    }

    #[test]
    fn poll_rate_changes_the_period() {
        let clock = ManualClock::new();
        let mut keypad = SampledKeypad::new(HeldKey(Key::Down), clock);
        keypad.set_poll_rate(2); // 500 ms period

        assert_eq!(keypad.get_key(), Key::Down);
        keypad.clock.advance(400);
        assert_eq!(keypad.get_key(), Key::NoSample);
        keypad.clock.advance(100);
        assert_eq!(keypad.get_key(), Key::Down);
    }

    #[test]
    fn zero_rate_is_clamped() {
        let clock = ManualClock::new();
        let mut keypad = SampledKeypad::new(HeldKey(Key::Up), clock);
        keypad.set_poll_rate(0); // clamped to 1 sample/s

        assert_eq!(keypad.get_key(), Key::Up);
        keypad.clock.advance(999);
        assert_eq!(keypad.get_key(), Key::NoSample);
        keypad.clock.advance(1);
        assert_eq!(keypad.get_key(), Key::Up);
    }
}
