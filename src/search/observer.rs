//! Per-round reporting hooks for the matcher
//!
//! The matcher calls [`SearchObserver::on_step`] once per alignment it
//! tries. Observers only see what happened; they cannot influence the scan.

use serde::Serialize;

/// Which rule decided how far the pattern moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftRule {
    /// Mismatched text byte realigned with its last occurrence in the pattern
    BadCharacter,
    /// Matched suffix realigned with another occurrence or a prefix
    GoodSuffix,
    /// Full match; moved by the pattern's period (`m - l[1]`)
    FullMatch,
    /// Neither rule gave more than one position, or the text is exhausted
    MinimalStep,
}

impl ShiftRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftRule::BadCharacter => "bad character",
            ShiftRule::GoodSuffix => "good suffix",
            ShiftRule::FullMatch => "full match",
            ShiftRule::MinimalStep => "minimal step",
        }
    }
}

/// Result of comparing the pattern at one alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Match,
    /// First mismatch found scanning right to left, at pattern index `at`
    Mismatch { at: usize, byte: u8 },
}

/// One comparison round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShiftStep {
    /// Alignment offset of the pattern in the text
    pub offset: usize,
    pub outcome: Outcome,
    pub rule: ShiftRule,
    pub shift: usize,
    /// Candidate shifts, kept so a trace can show why `rule` won
    pub bad_char_shift: isize,
    pub good_suffix_shift: usize,
}

/// Receives one [`ShiftStep`] per comparison round
pub trait SearchObserver {
    fn on_step(&mut self, step: &ShiftStep);
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    #[inline]
    fn on_step(&mut self, _step: &ShiftStep) {}
}

/// Closures work as observers
impl<F: FnMut(&ShiftStep)> SearchObserver for F {
    fn on_step(&mut self, step: &ShiftStep) {
        self(step)
    }
}

/// Collects every step, for tracing or tests
#[derive(Debug, Default, Clone, Serialize)]
pub struct TraceRecorder {
    pub steps: Vec<ShiftStep>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of alignments the matcher tried
    pub fn rounds(&self) -> usize {
        self.steps.len()
    }

    /// Total byte comparisons skipped relative to sliding by one each round
    pub fn positions_skipped(&self) -> usize {
        self.steps.iter().map(|s| s.shift.saturating_sub(1)).sum()
    }

    pub fn count_rule(&self, rule: ShiftRule) -> usize {
        self.steps.iter().filter(|s| s.rule == rule).count()
    }
}

impl SearchObserver for TraceRecorder {
    fn on_step(&mut self, step: &ShiftStep) {
        self.steps.push(*step);
    }
}
