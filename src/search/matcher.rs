use super::bad_char::BadCharTable;
use super::good_suffix::GoodSuffixTables;
use super::observer::{NoopObserver, Outcome, SearchObserver, ShiftRule, ShiftStep};
use crate::error::{Result, SearchError};

/// A pattern preprocessed for Boyer-Moore search.
///
/// Immutable once built; the same value can search any number of texts,
/// from any number of threads.
#[derive(Debug, Clone)]
pub struct BoyerMoore {
    pattern: Vec<u8>,
    bad_char: BadCharTable,
    good_suffix: GoodSuffixTables,
}

impl BoyerMoore {
    /// Preprocess `pattern`. Fails on an empty pattern.
    pub fn new(pattern: &[u8]) -> Result<Self> {
        if pattern.is_empty() {
            return Err(SearchError::EmptyPattern);
        }

        Ok(Self {
            pattern: pattern.to_vec(),
            bad_char: BadCharTable::build(pattern),
            good_suffix: GoodSuffixTables::build(pattern),
        })
    }

    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    pub fn bad_char_table(&self) -> &BadCharTable {
        &self.bad_char
    }

    pub fn good_suffix_tables(&self) -> &GoodSuffixTables {
        &self.good_suffix
    }

    /// All occurrences in `text`, including overlapping ones, left to right.
    pub fn find_all(&self, text: &[u8]) -> Vec<usize> {
        self.find_all_observed(text, &mut NoopObserver)
    }

    /// [`find_all`](Self::find_all), reporting every comparison round to
    /// `observer`.
    pub fn find_all_observed<O: SearchObserver + ?Sized>(
        &self,
        text: &[u8],
        observer: &mut O,
    ) -> Vec<usize> {
        let mut positions = Vec::new();
        self.scan(text, observer, |s| {
            positions.push(s);
            true
        });
        positions
    }

    /// Leftmost occurrence, stopping the scan there.
    pub fn find_first(&self, text: &[u8]) -> Option<usize> {
        let mut first = None;
        self.scan(text, &mut NoopObserver, |s| {
            first = Some(s);
            false
        });
        first
    }

    /// Number of occurrences, overlapping ones included.
    pub fn count(&self, text: &[u8]) -> usize {
        let mut count = 0;
        self.scan(text, &mut NoopObserver, |_| {
            count += 1;
            true
        });
        count
    }

    /// Slide the pattern over `text`, calling `on_match` for each occurrence
    /// until it returns `false`.
    fn scan<O, F>(&self, text: &[u8], observer: &mut O, mut on_match: F)
    where
        O: SearchObserver + ?Sized,
        F: FnMut(usize) -> bool,
    {
        let pattern = self.pattern.as_slice();
        let m = pattern.len();
        let n = text.len();

        if m > n {
            return;
        }

        let mut s = 0;
        while s <= n - m {
            // Right-to-left comparison; `j` ends one past the mismatch.
            let mut j = m;
            while j > 0 && pattern[j - 1] == text[s + j - 1] {
                j -= 1;
            }

            let step = if j == 0 {
                let (rule, shift) = if s + m < n {
                    (ShiftRule::FullMatch, self.good_suffix.full_match_shift())
                } else {
                    (ShiftRule::MinimalStep, 1)
                };
                ShiftStep {
                    offset: s,
                    outcome: Outcome::Match,
                    rule,
                    shift,
                    bad_char_shift: 0,
                    good_suffix_shift: 0,
                }
            } else {
                let j = j - 1;
                let byte = text[s + j];
                let bad = self.bad_char.shift(j, byte);
                let good = self.good_suffix.shift(j);

                let (rule, shift) = if bad >= 2 && bad as usize >= good {
                    (ShiftRule::BadCharacter, bad as usize)
                } else if good >= 2 {
                    (ShiftRule::GoodSuffix, good)
                } else {
                    (ShiftRule::MinimalStep, 1)
                };
                ShiftStep {
                    offset: s,
                    outcome: Outcome::Mismatch { at: j, byte },
                    rule,
                    shift,
                    bad_char_shift: bad,
                    good_suffix_shift: good,
                }
            };

            observer.on_step(&step);

            if step.outcome == Outcome::Match && !on_match(s) {
                return;
            }

            s += step.shift;
        }
    }
}

/// Find every occurrence of `pattern` in `text`.
///
/// An empty pattern has no occurrences.
pub fn search(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    try_search(text, pattern).unwrap_or_default()
}

/// Like [`search`], but an empty pattern is an error.
pub fn try_search(text: &[u8], pattern: &[u8]) -> Result<Vec<usize>> {
    Ok(BoyerMoore::new(pattern)?.find_all(text))
}

/// Like [`search`], reporting every comparison round to `observer`.
pub fn search_with_observer<O: SearchObserver + ?Sized>(
    text: &[u8],
    pattern: &[u8],
    observer: &mut O,
) -> Vec<usize> {
    match BoyerMoore::new(pattern) {
        Ok(bm) => bm.find_all_observed(text, observer),
        Err(_) => Vec::new(),
    }
}
