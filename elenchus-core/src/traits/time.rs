//! Time source trait

/// Monotonic millisecond clock with a blocking delay.
///
/// The engine is single-threaded and cooperative; both the heartbeat
/// pulse and the SELECT repeat deadline are driven through this trait,
/// never through timer interrupts.
pub trait Monotonic {
    /// Milliseconds since an arbitrary epoch; never decreases.
    fn now_ms(&self) -> u64;

    /// Block for at least `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}
