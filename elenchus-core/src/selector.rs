//! Selector tree definitions
//!
//! A selector level is an ordered, statically defined sequence of
//! entries. Levels are plain `&'static [Entry]` slices; the end of the
//! slice is the end of the level, so RIGHT movement stops on the last
//! entry.

use crate::diag::{DiagnosticCtor, OpCode};
use crate::keys::Key;
use crate::report::Report;

/// A selector level.
pub type Selector = &'static [Entry];

/// One selectable entry in a selector level.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    /// Row-0 label, at most one display row.
    pub label: &'static str,
    /// Capability invoked for SELECT/UP/DOWN on this entry.
    pub action: Action,
    /// Submenu entries are auto-invoked with [`Key::None`] when the
    /// cursor lands on them, so row 1 shows their status line without
    /// a SELECT press. They are also the only entries UP/DOWN reach.
    pub submenu: bool,
}

/// Tagged action capability for a selector entry.
#[derive(Debug, Clone, Copy)]
pub enum Action {
    /// Invoke a free function; for status/configuration entries that
    /// need no instance state.
    Call(fn(Key) -> Report),
    /// Flip the SELECT repeat window between off and the configured
    /// span.
    ToggleRepeat,
    /// Tear down the active diagnostic and construct this one in its
    /// place.
    Launch(DiagnosticCtor),
    /// Forward the key to the active diagnostic instance under this
    /// operation tag.
    Op(OpCode),
}

/// Cursor over the active selector level.
///
/// Invariant: `index` always addresses a real entry of `selector`.
/// Mutated only by the navigation engine.
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    selector: Selector,
    index: usize,
}

impl Cursor {
    /// Park at entry 0 of a level. The level must be non-empty.
    pub fn new(selector: Selector) -> Self {
        debug_assert!(!selector.is_empty());
        Self { selector, index: 0 }
    }

    /// The highlighted entry.
    pub fn entry(&self) -> &'static Entry {
        &self.selector[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn selector(&self) -> Selector {
        self.selector
    }

    /// Move one entry left; never goes below entry 0.
    pub fn retreat(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Move one entry right if another entry exists.
    pub fn advance(&mut self) {
        if self.index + 1 < self.selector.len() {
            self.index += 1;
        }
    }
}

/// Identity comparison of two selector levels.
///
/// Levels are static data, so pointer identity is level identity; this
/// is how the engine recognizes the diagnostic root.
pub fn same_level(a: Selector, b: Selector) -> bool {
    core::ptr::eq(a.as_ptr(), b.as_ptr()) && a.len() == b.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_key: Key) -> Report {
        Report::success()
    }

    static LEVEL: &[Entry] = &[
        Entry {
            label: "FIRST",
            action: Action::Call(noop),
            submenu: false,
        },
        Entry {
            label: "SECOND",
            action: Action::Call(noop),
            submenu: false,
        },
        Entry {
            label: "THIRD",
            action: Action::Call(noop),
            submenu: false,
        },
    ];

    static OTHER: &[Entry] = &[Entry {
        label: "LONE",
        action: Action::Call(noop),
        submenu: false,
    }];

    #[test]
    fn retreat_saturates_at_entry_zero() {
        let mut cursor = Cursor::new(LEVEL);
        cursor.retreat();
        assert_eq!(cursor.index(), 0);
        cursor.advance();
        cursor.retreat();
        cursor.retreat();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn advance_stops_on_last_entry() {
        let mut cursor = Cursor::new(LEVEL);
        for _ in 0..10 {
            cursor.advance();
        }
        assert_eq!(cursor.index(), LEVEL.len() - 1);
        assert_eq!(cursor.entry().label, "THIRD");
    }

    #[test]
    fn level_identity_is_pointer_identity() {
        assert!(same_level(LEVEL, LEVEL));
        assert!(!same_level(LEVEL, OTHER));
    }
}
