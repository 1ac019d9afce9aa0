//! Diagnostic instances and the unique-owner slot
//!
//! A diagnostic is the device's unit of work: a bundle of test
//! operations with its own selector level. At most one instance exists
//! at a time, owned by `DiagnosticSlot`; replacing it always drops the
//! previous instance before the new constructor runs.

use alloc::boxed::Box;

use crate::keys::Key;
use crate::report::Report;
use crate::selector::Selector;

/// Opaque operation tag a diagnostic interprets for its own entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OpCode(pub u8);

/// Constructor for a diagnostic instance.
pub type DiagnosticCtor = fn() -> Box<dyn Diagnostic>;

/// A diagnostic routine selectable from the root menu.
pub trait Diagnostic {
    /// The diagnostic's own selector level; the cursor switches here
    /// when the diagnostic is launched.
    fn selector(&self) -> Selector;

    /// Perform the operation tagged `op` for one of this diagnostic's
    /// entries. `key` is the key that triggered the invocation, or
    /// [`Key::None`] for the submenu status peek.
    fn invoke(&mut self, op: OpCode, key: Key) -> Report;
}

/// Unique-owner slot for the active diagnostic instance.
pub struct DiagnosticSlot(Option<Box<dyn Diagnostic>>);

impl DiagnosticSlot {
    pub const fn empty() -> Self {
        Self(None)
    }

    /// Drop the current instance, then construct and install a new one.
    ///
    /// The drop happens strictly before the constructor runs; the two
    /// instances never coexist.
    pub fn replace(&mut self, ctor: DiagnosticCtor) -> &mut dyn Diagnostic {
        self.0 = None;
        self.0.insert(ctor()).as_mut()
    }

    /// The active instance, if any diagnostic has been launched.
    pub fn active(&mut self) -> Option<&mut (dyn Diagnostic + 'static)> {
        self.0.as_deref_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl Default for DiagnosticSlot {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::{Action, Entry};
    use core::sync::atomic::{AtomicUsize, Ordering};

    static IDLE_LEVEL: &[Entry] = &[Entry {
        label: "IDLE",
        action: Action::Op(OpCode(0)),
        submenu: false,
    }];

    // Shared sequence counter so the drop/construct order is observable.
    static SEQ: AtomicUsize = AtomicUsize::new(0);
    static FIRST_DROPPED_AT: AtomicUsize = AtomicUsize::new(0);
    static SECOND_BUILT_AT: AtomicUsize = AtomicUsize::new(0);

    fn stamp() -> usize {
        SEQ.fetch_add(1, Ordering::SeqCst) + 1
    }

    struct First;

    impl Diagnostic for First {
        fn selector(&self) -> Selector {
            IDLE_LEVEL
        }
        fn invoke(&mut self, _op: OpCode, _key: Key) -> Report {
            Report::success()
        }
    }

    impl Drop for First {
        fn drop(&mut self) {
            FIRST_DROPPED_AT.store(stamp(), Ordering::SeqCst);
        }
    }

    struct Second;

    impl Diagnostic for Second {
        fn selector(&self) -> Selector {
            IDLE_LEVEL
        }
        fn invoke(&mut self, _op: OpCode, _key: Key) -> Report {
            Report::success()
        }
    }

    fn build_first() -> Box<dyn Diagnostic> {
        Box::new(First)
    }

    fn build_second() -> Box<dyn Diagnostic> {
        SECOND_BUILT_AT.store(stamp(), Ordering::SeqCst);
        Box::new(Second)
    }

    #[test]
    fn replace_drops_previous_before_constructing() {
        let mut slot = DiagnosticSlot::empty();
        assert!(slot.is_empty());

        slot.replace(build_first);
        assert!(!slot.is_empty());

        slot.replace(build_second);

        let dropped = FIRST_DROPPED_AT.load(Ordering::SeqCst);
        let built = SECOND_BUILT_AT.load(Ordering::SeqCst);
        assert!(dropped > 0 && built > 0);
        assert!(
            dropped < built,
            "previous instance must be released before the next is built"
        );
    }

    #[test]
    fn empty_slot_has_no_active_instance() {
        let mut slot = DiagnosticSlot::empty();
        assert!(slot.active().is_none());
    }
}
