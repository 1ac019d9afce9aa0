//! Action reports
//!
//! Every selector entry invocation produces a `Report`: a pass/fail
//! outcome plus the one-line status text rendered on display row 1.

use heapless::String;

use crate::traits::display::SCREEN_COLS;

/// Maximum report line length, one display row.
pub const LINE_LEN: usize = SCREEN_COLS;

/// Pass/fail outcome of an entry action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    Pass,
    Fail,
}

/// Result of invoking a selector entry's action.
///
/// Produced fresh on every invocation and read immediately; a `Fail`
/// outcome only ever stops a SELECT repeat sub-loop early, it is not
/// an error channel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report {
    outcome: Outcome,
    line: String<LINE_LEN>,
}

impl Report {
    /// Reserved status line for actions with nothing to report.
    pub const NO_REPORT: &'static str = "OK:";

    /// Successful outcome with a status line.
    pub fn pass(line: &str) -> Self {
        Self::new(Outcome::Pass, line)
    }

    /// Failed outcome with a status line.
    pub fn fail(line: &str) -> Self {
        Self::new(Outcome::Fail, line)
    }

    /// Successful outcome with the reserved no-report line.
    pub fn success() -> Self {
        Self::pass(Self::NO_REPORT)
    }

    fn new(outcome: Outcome, line: &str) -> Self {
        // Truncate to one row; labels and status lines are ASCII.
        let line = if line.len() > LINE_LEN {
            &line[..LINE_LEN]
        } else {
            line
        };
        let mut bounded = String::new();
        let _ = bounded.push_str(line);
        Self {
            outcome,
            line: bounded,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Pass
    }

    /// The row-1 status text.
    pub fn line(&self) -> &str {
        self.line.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_and_fail_outcomes() {
        assert!(Report::pass("hello").passed());
        assert!(!Report::fail("broken").passed());
        assert_eq!(Report::fail("broken").outcome(), Outcome::Fail);
    }

    #[test]
    fn success_uses_reserved_line() {
        let report = Report::success();
        assert!(report.passed());
        assert_eq!(report.line(), Report::NO_REPORT);
    }

    #[test]
    fn long_lines_are_bounded_to_one_row() {
        let report = Report::pass("0123456789ABCDEFGHIJ");
        assert_eq!(report.line(), "0123456789ABCDEF");
        assert_eq!(report.line().len(), LINE_LEN);
    }

    #[test]
    fn short_lines_kept_verbatim() {
        let report = Report::pass("RAM OK");
        assert_eq!(report.line(), "RAM OK");
    }
}
