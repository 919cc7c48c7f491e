//! Deduplicating candidate accumulator
//!
//! Central enforcement point for the two set invariants: every member
//! satisfies the length window, and the member count never exceeds the
//! configured cap.

use std::collections::HashSet;

use crate::error::{Result, WordforgeError};
use crate::types::{LengthWindow, SortOrder};

/// Deduplicated candidate set under construction
#[derive(Debug, Clone)]
pub struct CandidateAccumulator {
    set: HashSet<String>,
    window: LengthWindow,
    cap: Option<usize>,
}

impl CandidateAccumulator {
    pub fn new(window: LengthWindow, cap: Option<usize>) -> Self {
        Self {
            set: HashSet::new(),
            window,
            cap,
        }
    }

    /// Add a candidate if it fits the window. Out-of-window candidates are
    /// silently dropped; blowing the cap is a hard error.
    pub fn push(&mut self, candidate: String) -> Result<()> {
        if !self.window.accepts(&candidate) {
            return Ok(());
        }
        if self.set.insert(candidate) {
            self.check_cap()?;
        }
        Ok(())
    }

    /// Union another accumulator into this one (parallel driver merge).
    /// Members of `other` already passed its window filter.
    pub fn merge(&mut self, other: CandidateAccumulator) -> Result<()> {
        self.set.extend(other.set);
        self.check_cap()
    }

    fn check_cap(&self) -> Result<()> {
        match self.cap {
            Some(cap) if self.set.len() > cap => {
                Err(WordforgeError::limit_exceeded(self.set.len(), cap))
            }
            _ => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.set.contains(candidate)
    }

    pub fn window(&self) -> LengthWindow {
        self.window
    }

    /// Finalize into a deterministic output sequence
    pub fn into_sorted(self, order: SortOrder) -> Vec<String> {
        let mut out: Vec<String> = self.set.into_iter().collect();
        match order {
            SortOrder::Lexicographic => out.sort_unstable(),
            SortOrder::Length => {
                out.sort_unstable_by(|a, b| {
                    a.chars()
                        .count()
                        .cmp(&b.chars().count())
                        .then_with(|| a.cmp(b))
                });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_filtering() {
        let mut acc = CandidateAccumulator::new(LengthWindow::new(3, 5), None);
        acc.push("ab".to_string()).unwrap();
        acc.push("abc".to_string()).unwrap();
        acc.push("abcdef".to_string()).unwrap();
        assert_eq!(acc.len(), 1);
        assert!(acc.contains("abc"));
    }

    #[test]
    fn test_deduplication() {
        let mut acc = CandidateAccumulator::new(LengthWindow::new(1, 10), None);
        acc.push("same".to_string()).unwrap();
        acc.push("same".to_string()).unwrap();
        assert_eq!(acc.len(), 1);
    }

    #[test]
    fn test_cap_fails_fast() {
        let mut acc = CandidateAccumulator::new(LengthWindow::new(1, 10), Some(2));
        acc.push("one".to_string()).unwrap();
        acc.push("two".to_string()).unwrap();
        let err = acc.push("three".to_string()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::WordforgeError::GenerationLimitExceeded { generated: 3, limit: 2 }
        ));
    }

    #[test]
    fn test_duplicate_does_not_trip_cap() {
        let mut acc = CandidateAccumulator::new(LengthWindow::new(1, 10), Some(1));
        acc.push("one".to_string()).unwrap();
        acc.push("one".to_string()).unwrap();
        assert_eq!(acc.len(), 1);
    }

    #[test]
    fn test_merge_unions() {
        let window = LengthWindow::new(1, 10);
        let mut a = CandidateAccumulator::new(window, None);
        a.push("left".to_string()).unwrap();
        a.push("both".to_string()).unwrap();
        let mut b = CandidateAccumulator::new(window, None);
        b.push("right".to_string()).unwrap();
        b.push("both".to_string()).unwrap();
        a.merge(b).unwrap();
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_sort_orders() {
        let window = LengthWindow::new(1, 10);
        let mut acc = CandidateAccumulator::new(window, None);
        for s in ["bb", "a", "ccc", "z"] {
            acc.push(s.to_string()).unwrap();
        }
        let lex = acc.clone().into_sorted(SortOrder::Lexicographic);
        assert_eq!(lex, vec!["a", "bb", "ccc", "z"]);
        let by_len = acc.into_sorted(SortOrder::Length);
        assert_eq!(by_len, vec!["a", "z", "bb", "ccc"]);
    }

    #[test]
    fn test_degenerate_window_accepts_nothing() {
        let mut acc = CandidateAccumulator::new(LengthWindow::new(10, 5), None);
        acc.push("mid-size".to_string()).unwrap();
        assert!(acc.is_empty());
    }
}
