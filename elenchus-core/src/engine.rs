//! Navigation engine
//!
//! Cursor-on-tree input dispatch: key events move a cursor over the
//! active selector level, invoke entry actions and render the two
//! display rows with the outcome. One blocking poll loop, no executor;
//! the engine owns all mutable state so independent instances can run
//! side by side in tests.

use core::fmt::Write as _;

use heapless::String;

use crate::config::EngineConfig;
use crate::diag::DiagnosticSlot;
use crate::keys::Key;
use crate::report::{Report, LINE_LEN};
use crate::selector::{same_level, Action, Cursor, Entry, Selector};
use crate::traits::display::BLANK_LINE;
use crate::traits::{DisplaySurface, KeySource, Monotonic, StatusLed};

/// The navigation engine.
///
/// Generic over its four hardware capabilities so hosts can run it
/// against mock implementations.
pub struct Engine<D, K, C, L> {
    display: D,
    keys: K,
    clock: C,
    led: L,
    config: EngineConfig,
    cursor: Cursor,
    /// Root diagnostic selector; SELECT never auto-repeats here.
    diag_root: Selector,
    /// Seconds the SELECT repeat window stays open; 0 disables it.
    repeat_s: u8,
    slot: DiagnosticSlot,
    prev_key: Key,
}

impl<D, K, C, L> Engine<D, K, C, L>
where
    D: DisplaySurface,
    K: KeySource,
    C: Monotonic,
    L: StatusLed,
{
    /// Engine parked on entry 0 of the diagnostic root selector.
    pub fn new(display: D, keys: K, clock: C, led: L, diag_root: Selector) -> Self {
        Self::with_config(display, keys, clock, led, diag_root, EngineConfig::default())
    }

    pub fn with_config(
        display: D,
        keys: K,
        clock: C,
        led: L,
        diag_root: Selector,
        config: EngineConfig,
    ) -> Self {
        Self {
            display,
            keys,
            clock,
            led,
            config,
            cursor: Cursor::new(diag_root),
            diag_root,
            repeat_s: 0,
            slot: DiagnosticSlot::empty(),
            prev_key: Key::NoSample,
        }
    }

    /// Power-on sequence: banner row, LED off, settle pause, key
    /// source rate.
    pub fn setup(&mut self) {
        self.display.clear();
        self.display.set_cursor(0, 0);
        self.display.print(self.config.banner);
        self.led.set_on(false);

        self.clock.delay_ms(self.config.banner_hold_ms);

        self.keys.set_poll_rate(self.config.samples_per_s);
    }

    /// Run the poll loop forever.
    pub fn run(&mut self) -> ! {
        self.setup();
        loop {
            self.poll();
        }
    }

    /// One poll-loop iteration: read a key, dispatch, render.
    pub fn poll(&mut self) {
        let mut current = self.keys.get_key();

        // The very first pass behaves as a LEFT press so entry 0 gets
        // rendered without waiting for real input.
        if self.prev_key == Key::NoSample {
            current = Key::Left;
        }

        // Held keys and empty sample slots only pulse the heartbeat;
        // the previous key is deliberately left untouched.
        if current == Key::NoSample || current == self.prev_key {
            self.heartbeat();
            return;
        }

        match current {
            Key::NoSample | Key::None => {}
            Key::Left => {
                self.cursor.retreat();
                self.render_entry();
            }
            Key::Right => {
                self.cursor.advance();
                self.render_entry();
            }
            Key::Up | Key::Down => self.adjust(current),
            Key::Select => self.select(),
        }

        self.prev_key = current;
    }

    /// Idle/held liveness pulse.
    fn heartbeat(&mut self) {
        self.led.set_on(false);
        self.clock.delay_ms(self.config.heartbeat_pulse_ms);
        self.led.set_on(true);
    }

    /// Clear and redraw row 0 with the highlighted entry's label.
    /// Submenu entries are peeked with a neutral key so row 1 shows
    /// their status line.
    fn render_entry(&mut self) {
        let entry = self.cursor.entry();

        self.display.clear();
        self.display.set_cursor(0, 0);
        self.display.print(entry.label);

        if entry.submenu {
            let report = self.invoke(entry, Key::None);
            self.display.set_cursor(0, 1);
            self.display.print(report.line());
        }
    }

    /// UP/DOWN adjust a value in place; only submenu entries respond.
    fn adjust(&mut self, key: Key) {
        let entry = self.cursor.entry();
        if !entry.submenu {
            return;
        }

        self.display.set_cursor(0, 1);
        self.display.print(BLANK_LINE);

        let report = self.invoke(entry, key);
        self.display.set_cursor(0, 1);
        self.display.print(report.line());
    }

    /// SELECT invokes the entry's action, re-invoking while the repeat
    /// window is open. The window never applies to the diagnostic root,
    /// so launches run exactly once.
    fn select(&mut self) {
        let deadline = self.clock.now_ms() + u64::from(self.repeat_s) * 1000;
        let origin = self.cursor.selector();

        self.display.set_cursor(0, 1);
        self.display.print(BLANK_LINE);

        // Execute-then-check: a closed window still invokes once.
        let report = loop {
            let report = self.invoke(self.cursor.entry(), Key::Select);
            let keep_going = report.passed()
                && self.clock.now_ms() < deadline
                && !same_level(origin, self.diag_root);
            if !keep_going {
                break report;
            }
        };

        // The action may have switched selector levels; redraw both
        // rows from scratch.
        let entry = self.cursor.entry();
        self.display.clear();
        self.display.set_cursor(0, 0);
        self.display.print(entry.label);
        self.display.set_cursor(0, 1);
        self.display.print(report.line());
    }

    /// Dispatch one entry action.
    fn invoke(&mut self, entry: &'static Entry, key: Key) -> Report {
        match entry.action {
            Action::Call(f) => f(key),
            Action::ToggleRepeat => self.toggle_repeat(),
            Action::Launch(ctor) => {
                let level = self.slot.replace(ctor).selector();
                self.cursor = Cursor::new(level);
                Report::success()
            }
            Action::Op(op) => match self.slot.active() {
                Some(diag) => diag.invoke(op, key),
                None => Report::fail("NO DIAGNOSTIC"),
            },
        }
    }

    /// Flip the SELECT repeat window between off and the configured
    /// span.
    fn toggle_repeat(&mut self) -> Report {
        self.repeat_s = if self.repeat_s == 0 {
            self.config.repeat_window_s
        } else {
            0
        };

        let mut line: String<LINE_LEN> = String::new();
        let _ = write!(line, "OK: Repeat {}S", self.repeat_s);
        Report::pass(line.as_str())
    }
}
