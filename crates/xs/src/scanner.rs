//! Line-by-line state machine for locating an isotope block
//!
//! Cross-section files embed the tables of many isotopes in one file with
//! informal text markers, so the block is found by walking the lines through
//! four states:
//!
//! ```text
//!   Searching ──(line mentions isotope)──> AwaitingMarker
//!   AwaitingMarker ──(#data...)──> Capturing
//!   AwaitingMarker | Capturing ──(//)──> Done
//! ```
//!
//! Once the isotope has been seen, every line (including the one that
//! mentioned the name) is checked for `#data...` first and `//` second. While
//! capturing, any line not starting with `#` is handed back as data.
//!
//! Isotope names are matched as plain substrings, so "U" will also match a
//! line for "U235". Pick names that are not substrings of other isotopes in
//! the same file.

use log::trace;

use crate::parsers::{is_comment, is_data_marker, is_end_marker, mentions_isotope};

/// Position of the scanner relative to the isotope block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// The isotope name has not been seen yet
    Searching,
    /// Name seen, waiting for the `#data...` marker
    AwaitingMarker,
    /// Inside the numeric data region
    Capturing,
    /// Hit the `//` sentinel, nothing further is read
    Done,
}

/// Finite state scanner for a single isotope block
///
/// Feed lines in file order with [BlockScanner::step()]. Lines that belong to
/// the data region are returned for parsing, everything else is consumed.
///
/// ```rust
/// # use ntrans_xs::{BlockScanner, ScanState};
/// let mut scanner = BlockScanner::new("Fe-56");
///
/// assert_eq!(scanner.step("Fe-56 total"), None);
/// assert_eq!(scanner.state(), ScanState::AwaitingMarker);
///
/// assert_eq!(scanner.step("#data..."), None);
/// assert_eq!(scanner.step("# MeV barns"), None);
/// assert_eq!(scanner.step("1.0 2.5"), Some("1.0 2.5"));
///
/// assert_eq!(scanner.step("//"), None);
/// assert!(scanner.is_done());
/// ```
#[derive(Debug, Clone)]
pub struct BlockScanner<'a> {
    isotope: &'a str,
    state: ScanState,
}

impl<'a> BlockScanner<'a> {
    /// Start searching for `isotope`
    pub fn new(isotope: &'a str) -> Self {
        Self {
            isotope,
            state: ScanState::Searching,
        }
    }

    /// Current state of the scanner
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Has the isotope name been seen on any line so far?
    pub fn is_found(&self) -> bool {
        self.state != ScanState::Searching
    }

    /// Has the `//` sentinel closed the block?
    pub fn is_done(&self) -> bool {
        self.state == ScanState::Done
    }

    /// Advance over a single line
    ///
    /// Returns `Some(line)` only when the line is inside the data region and
    /// should be parsed as `<energy> <xs>`.
    pub fn step<'l>(&mut self, line: &'l str) -> Option<&'l str> {
        match self.state {
            ScanState::Done => return None,
            ScanState::Searching if mentions_isotope(line, self.isotope) => {
                self.transition(ScanState::AwaitingMarker)
            }
            ScanState::Searching => return None,
            _ => (),
        }

        if is_data_marker(line) {
            self.transition(ScanState::Capturing);
            None
        } else if is_end_marker(line) {
            self.transition(ScanState::Done);
            None
        } else if self.state == ScanState::Capturing && !is_comment(line) {
            Some(line)
        } else {
            None
        }
    }

    fn transition(&mut self, next: ScanState) {
        if self.state != next {
            trace!("{}: {:?} -> {:?}", self.isotope, self.state, next);
        }
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run every line through the scanner and keep the data lines
    fn collect<'l>(scanner: &mut BlockScanner, lines: &[&'l str]) -> Vec<&'l str> {
        lines.iter().copied().filter_map(|l| scanner.step(l)).collect()
    }

    #[test]
    fn ignores_everything_before_name() {
        let mut scanner = BlockScanner::new("A");
        let data = collect(&mut scanner, &["#data...", "1.0 2.0", "//", "3.0 4.0"]);
        assert!(data.is_empty());
        assert_eq!(scanner.state(), ScanState::Searching);
        assert!(!scanner.is_found());
    }

    #[test]
    fn captures_block() {
        let mut scanner = BlockScanner::new("A");
        let lines = ["header", "A", "#data...", "1.0 2.5", "# skipped", "2.0 3.0", "//"];
        assert_eq!(collect(&mut scanner, &lines), vec!["1.0 2.5", "2.0 3.0"]);
        assert!(scanner.is_done());
    }

    #[test]
    fn lines_between_name_and_marker_are_skipped() {
        let mut scanner = BlockScanner::new("A");
        let lines = ["A", "some description", "1.0 1.0", "#data...", "2.0 2.0"];
        assert_eq!(collect(&mut scanner, &lines), vec!["2.0 2.0"]);
        assert_eq!(scanner.state(), ScanState::Capturing);
    }

    #[test]
    fn marker_on_name_line() {
        let mut scanner = BlockScanner::new("A");
        assert_eq!(scanner.step("A #data..."), None);
        assert_eq!(scanner.state(), ScanState::Capturing);
    }

    #[test]
    fn sentinel_on_name_line_ends_scan() {
        let mut scanner = BlockScanner::new("A");
        let lines = ["A // note", "#data...", "1.0 1.0"];
        assert!(collect(&mut scanner, &lines).is_empty());
        assert!(scanner.is_done());
        assert!(scanner.is_found());
    }

    #[test]
    fn only_first_block_is_read() {
        let mut scanner = BlockScanner::new("A");
        let lines = ["A", "#data...", "1.0 1.0", "//", "A", "#data...", "9.0 9.0", "//"];
        assert_eq!(collect(&mut scanner, &lines), vec!["1.0 1.0"]);
    }

    #[test]
    fn sentinel_before_name_is_ignored() {
        let mut scanner = BlockScanner::new("B");
        let lines = ["A", "#data...", "1.0 1.0", "//", "B", "#data...", "2.0 2.0", "//"];
        assert_eq!(collect(&mut scanner, &lines), vec!["2.0 2.0"]);
    }

    #[test]
    fn substring_match_is_kept() {
        // "U" is found inside the U235 header, a known limitation
        let mut scanner = BlockScanner::new("U");
        let lines = ["U235", "#data...", "1.0 1.0", "//", "U", "#data...", "2.0 2.0"];
        assert_eq!(collect(&mut scanner, &lines), vec!["1.0 1.0"]);
    }

    #[test]
    fn indented_comment_is_data() {
        let mut scanner = BlockScanner::new("A");
        let lines = ["A", "#data...", "  # not a comment"];
        assert_eq!(collect(&mut scanner, &lines), vec!["  # not a comment"]);
    }
}
