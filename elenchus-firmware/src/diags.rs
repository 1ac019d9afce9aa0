//! Selector tables and the built-in demo diagnostics
//!
//! Real board-specific diagnostics plug in the same way: a constructor
//! in the root selector, a selector level per diagnostic, and op tags
//! the instance interprets. The two shipped here exercise the engine
//! paths (repeat soak, UP/DOWN adjustment, instance replacement) on a
//! bare board.

use alloc::boxed::Box;
use core::fmt::Write as _;

use heapless::String;

use elenchus_core::diag::{Diagnostic, OpCode};
use elenchus_core::keys::Key;
use elenchus_core::report::{Report, LINE_LEN};
use elenchus_core::selector::{Action, Entry, Selector};

/// Root selector: configuration entries first, diagnostics after.
pub static ROOT_SELECTOR: &[Entry] = &[
    Entry {
        label: "Set Repeat",
        action: Action::ToggleRepeat,
        submenu: false,
    },
    Entry {
        label: "About",
        action: Action::Call(about),
        submenu: true,
    },
    Entry {
        label: "Diag: Soak",
        action: Action::Launch(SoakDiag::build),
        submenu: false,
    },
    Entry {
        label: "Diag: March",
        action: Action::Launch(MarchDiag::build),
        submenu: false,
    },
];

fn about(_key: Key) -> Report {
    Report::pass(concat!("FW v", env!("CARGO_PKG_VERSION")))
}

// --- Soak ---------------------------------------------------------------

const OP_SOAK_RUN: OpCode = OpCode(0);
const OP_SOAK_BURST: OpCode = OpCode(1);

static SOAK_SELECTOR: &[Entry] = &[
    Entry {
        label: "Soak: Run",
        action: Action::Op(OP_SOAK_RUN),
        submenu: false,
    },
    Entry {
        label: "Soak: Burst",
        action: Action::Op(OP_SOAK_BURST),
        submenu: true,
    },
];

/// Invocation counter; hold SELECT with repeat on to watch it climb.
struct SoakDiag {
    runs: u32,
    burst: u8,
}

impl SoakDiag {
    fn build() -> Box<dyn Diagnostic> {
        Box::new(Self { runs: 0, burst: 1 })
    }
}

impl Diagnostic for SoakDiag {
    fn selector(&self) -> Selector {
        SOAK_SELECTOR
    }

    fn invoke(&mut self, op: OpCode, key: Key) -> Report {
        let mut line: String<LINE_LEN> = String::new();
        match op {
            OP_SOAK_RUN => {
                self.runs = self.runs.wrapping_add(self.burst as u32);
                let _ = write!(line, "PASS: {} runs", self.runs);
                Report::pass(line.as_str())
            }
            OP_SOAK_BURST => {
                match key {
                    Key::Up => self.burst = self.burst.saturating_add(1),
                    Key::Down => self.burst = self.burst.saturating_sub(1).max(1),
                    _ => {}
                }
                let _ = write!(line, "Burst x{}", self.burst);
                Report::pass(line.as_str())
            }
            _ => Report::fail("E: BAD OP"),
        }
    }
}

// --- March --------------------------------------------------------------

const OP_MARCH_STEP: OpCode = OpCode(0);
const OP_MARCH_SHOW: OpCode = OpCode(1);

static MARCH_SELECTOR: &[Entry] = &[
    Entry {
        label: "March: Step",
        action: Action::Op(OP_MARCH_STEP),
        submenu: false,
    },
    Entry {
        label: "March: Pattern",
        action: Action::Op(OP_MARCH_SHOW),
        submenu: true,
    },
];

/// Walking-bit pattern stepper.
struct MarchDiag {
    pattern: u8,
}

impl MarchDiag {
    fn build() -> Box<dyn Diagnostic> {
        Box::new(Self { pattern: 0x01 })
    }

    fn show(&self) -> Report {
        let mut line: String<LINE_LEN> = String::new();
        let _ = write!(line, "PAT {:08b}", self.pattern);
        Report::pass(line.as_str())
    }
}

impl Diagnostic for MarchDiag {
    fn selector(&self) -> Selector {
        MARCH_SELECTOR
    }

    fn invoke(&mut self, op: OpCode, _key: Key) -> Report {
        match op {
            OP_MARCH_STEP => {
                self.pattern = self.pattern.rotate_left(1);
                self.show()
            }
            OP_MARCH_SHOW => self.show(),
            _ => Report::fail("E: BAD OP"),
        }
    }
}
