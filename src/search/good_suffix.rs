//! Good-suffix preprocessing
//!
//! Three arrays are derived from the pattern alone:
//!
//! 1. `N` ([`suffix_lengths`]) - for every end position `k`, the length of the
//!    longest common suffix of `pattern[..=k]` and the whole pattern
//! 2. `l` - for every start position `i`, the longest suffix of `pattern[i..]`
//!    that is also a prefix of the pattern (the full-shift fallback)
//! 3. `L` - the shift to apply once `pattern[i..]` has matched and
//!    `pattern[i - 1]` has not
//!
//! `N` is computed right to left in linear time by reusing the mirror of the
//! last explicitly compared window, the same trick the Z algorithm uses for
//! prefixes.

/// Longest common suffix of `pattern[..=k]` and `pattern`, for every `k`.
///
/// `N[m - 1]` is `m` by definition.
pub fn suffix_lengths(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut suff = vec![0usize; m];
    if m == 0 {
        return suff;
    }

    let last = m as isize - 1;
    suff[m - 1] = m;

    // (g, f] is the window of the last explicit comparison: pattern[g+1..=f]
    // equals the pattern suffix of the same length.
    let mut g = last;
    let mut f = last;

    for i in (0..m - 1).rev() {
        let i = i as isize;
        let mirrored = suff[(i + last - f) as usize];

        if i > g && (mirrored as isize) < i - g {
            suff[i as usize] = mirrored;
        } else {
            g = g.min(i);
            f = i;
            while g >= 0 && pattern[g as usize] == pattern[(g + last - f) as usize] {
                g -= 1;
            }
            suff[i as usize] = (f - g) as usize;
        }
    }

    suff
}

/// Good-suffix shift tables for one pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoodSuffixTables {
    /// `L`: shift after `pattern[i..]` matched and `pattern[i - 1]` did not.
    /// Length `m`; `L[0]` is never consulted and holds 0.
    pub big_l: Vec<usize>,
    /// `l`: longest suffix of `pattern[i..]` that is also a pattern prefix.
    /// Length `m + 1`; `l[0] = m`, `l[m] = 0`.
    pub little_l: Vec<usize>,
}

impl GoodSuffixTables {
    /// Build both tables for `pattern`.
    pub fn build(pattern: &[u8]) -> Self {
        let m = pattern.len();
        let suff = suffix_lengths(pattern);

        let mut little_l = vec![0usize; m + 1];
        for i in (0..m).rev() {
            let len = m - i;
            little_l[i] = if suff[len - 1] == len {
                len
            } else {
                little_l[i + 1]
            };
        }

        // Fallback first: slide so the longest matching prefix lines up.
        let mut big_l: Vec<usize> = (0..m).map(|i| m - little_l[i]).collect();

        // Then internal occurrences. suff[k] == len means pattern[..=k] ends
        // with the last `len` bytes and the byte before them differs, so the
        // occurrence is a valid realignment for a mismatch at m - len - 1.
        // Ascending k: the rightmost occurrence (smallest shift) wins.
        for (k, &len) in suff.iter().enumerate().take(m.saturating_sub(1)) {
            if len > 0 {
                big_l[m - len] = m - 1 - k;
            }
        }

        if m > 0 {
            big_l[0] = 0;
        }

        Self { big_l, little_l }
    }

    /// Pattern length the tables were built for
    pub fn pattern_len(&self) -> usize {
        self.big_l.len()
    }

    /// Good-suffix shift for a mismatch at pattern index `j`.
    ///
    /// Zero when nothing has matched yet (`j == m - 1`).
    #[inline]
    pub fn shift(&self, j: usize) -> usize {
        if j + 1 < self.big_l.len() {
            self.big_l[j + 1]
        } else {
            0
        }
    }

    /// Shift after a full match: the pattern's period, `m - l[1]`.
    #[inline]
    pub fn full_match_shift(&self) -> usize {
        self.pattern_len() - self.little_l.get(1).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn naive_suffix_lengths(p: &[u8]) -> Vec<usize> {
        (0..p.len())
            .map(|k| {
                p[..=k]
                    .iter()
                    .rev()
                    .zip(p.iter().rev())
                    .take_while(|(a, b)| a == b)
                    .count()
            })
            .collect()
    }

    fn naive_little_l(p: &[u8]) -> Vec<usize> {
        let m = p.len();
        (0..=m)
            .map(|i| {
                (0..=m - i)
                    .rev()
                    .find(|&len| p[..len] == p[m - len..])
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Smallest shift that keeps the matched suffix consistent and changes
    /// the byte under the mismatch (strong good-suffix rule).
    fn naive_big_l(p: &[u8]) -> Vec<usize> {
        let m = p.len();
        let mut out = vec![0usize; m];
        for i in 1..m {
            out[i] = (1..=m)
                .find(|&d| {
                    let suffix_ok = (i..m).all(|t| t < d || p[t - d] == p[t]);
                    let differs = i - 1 < d || p[i - 1 - d] != p[i - 1];
                    suffix_ok && differs
                })
                .unwrap_or(m);
        }
        out
    }

    #[test]
    fn test_suffix_lengths_abab() {
        assert_eq!(suffix_lengths(b"abab"), vec![0, 2, 0, 4]);
    }

    #[test]
    fn test_suffix_lengths_repetitive() {
        assert_eq!(suffix_lengths(b"aaaa"), vec![1, 2, 3, 4]);
        assert_eq!(suffix_lengths(b"aa"), vec![1, 2]);
    }

    #[test]
    fn test_suffix_lengths_empty() {
        assert!(suffix_lengths(b"").is_empty());
    }

    #[test]
    fn test_tables_abab() {
        let t = GoodSuffixTables::build(b"abab");
        assert_eq!(t.little_l, vec![4, 2, 2, 0, 0]);
        assert_eq!(t.big_l, vec![0, 2, 2, 4]);
        assert_eq!(t.full_match_shift(), 2);
    }

    #[test]
    fn test_tables_single_byte() {
        let t = GoodSuffixTables::build(b"s");
        assert_eq!(t.little_l, vec![1, 0]);
        assert_eq!(t.big_l, vec![0]);
        assert_eq!(t.shift(0), 0);
        assert_eq!(t.full_match_shift(), 1);
    }

    #[test]
    fn test_tables_no_border() {
        let t = GoodSuffixTables::build(b"abcd");
        assert_eq!(t.little_l, vec![4, 0, 0, 0, 0]);
        assert_eq!(t.big_l, vec![0, 4, 4, 4]);
        assert_eq!(t.full_match_shift(), 4);
    }

    #[test]
    fn test_tables_empty() {
        let t = GoodSuffixTables::build(b"");
        assert!(t.big_l.is_empty());
        assert_eq!(t.little_l, vec![0]);
        assert_eq!(t.shift(0), 0);
    }

    #[test]
    fn test_shift_uses_next_index() {
        let t = GoodSuffixTables::build(b"abab");
        assert_eq!(t.shift(3), 0);
        assert_eq!(t.shift(2), t.big_l[3]);
        assert_eq!(t.shift(0), t.big_l[1]);
    }

    proptest! {
        #[test]
        fn prop_suffix_lengths_match_naive(p in prop::collection::vec(b'a'..=b'c', 1..24)) {
            prop_assert_eq!(suffix_lengths(&p), naive_suffix_lengths(&p));
        }

        #[test]
        fn prop_tables_match_naive(p in prop::collection::vec(b'a'..=b'c', 1..24)) {
            let t = GoodSuffixTables::build(&p);
            prop_assert_eq!(&t.little_l, &naive_little_l(&p));
            prop_assert_eq!(&t.big_l, &naive_big_l(&p));
        }

        #[test]
        fn prop_table_bounds(p in prop::collection::vec(any::<u8>(), 1..32)) {
            let m = p.len();
            let t = GoodSuffixTables::build(&p);
            prop_assert_eq!(t.big_l.len(), m);
            prop_assert_eq!(t.little_l.len(), m + 1);
            prop_assert!(t.little_l.iter().all(|&v| v <= m));
            prop_assert!(t.big_l.iter().skip(1).all(|&v| v >= 1 && v <= m));
        }
    }
}
