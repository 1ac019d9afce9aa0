//! Keypad symbol alphabet
//!
//! Everything a `KeySource` can hand the engine, including the two
//! non-press symbols (`NoSample`, `None`) the dispatch logic keys off.

/// One decoded keypad event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// No fresh sample has been decoded since the last call.
    NoSample,
    /// A sample was taken and no key was down.
    ///
    /// Also used as the neutral key when the engine auto-invokes a
    /// submenu entry to fetch its status line.
    None,
    Left,
    Right,
    Up,
    Down,
    Select,
}
