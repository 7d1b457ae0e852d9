//! Sliding-window scanning kernel
//!
//! All rules share one scanning scheme: test the contiguous slice at every
//! offset `0..=n - window_size` independently, and merge the points of every
//! flagged slice into a single violation. Slices borrow the input, so a scan
//! allocates nothing per window.

use crate::{rule::Rule, violation::{Violation, ViolationCollector}};

/// Kernel that runs a window predicate over a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowScanner {
    rule: Rule,
    window_size: usize,
}

impl WindowScanner {
    pub fn new(rule: Rule) -> Self {
        Self {
            rule,
            window_size: rule.window_size(),
        }
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Number of windows a sequence of length `n` produces
    pub fn window_count(&self, n: usize) -> usize {
        if n < self.window_size {
            0
        } else {
            n - self.window_size + 1
        }
    }

    /// Flag every window for which `predicate` returns true
    pub fn scan<F>(&self, sequence: &[f64], mut predicate: F) -> Violation
    where
        F: FnMut(&[f64]) -> bool,
    {
        if sequence.len() < self.window_size {
            return Violation::empty(self.rule);
        }

        let mut collector = ViolationCollector::new(self.rule);
        for (offset, window) in sequence.windows(self.window_size).enumerate() {
            if predicate(window) {
                collector.add_window(offset, window);
            }
        }
        collector.finish()
    }
}
