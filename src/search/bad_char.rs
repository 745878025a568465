/// Sentinel returned for bytes that never occur in the pattern.
pub const ABSENT: isize = -1;

/// Rightmost occurrence of every byte value within a pattern.
///
/// A fixed 256-entry array indexed by byte value, so lookups are a single
/// load with no hashing.
#[derive(Clone)]
pub struct BadCharTable {
    last: [isize; 256],
}

impl BadCharTable {
    /// Build the table for `pattern`. Later occurrences overwrite earlier ones.
    pub fn build(pattern: &[u8]) -> Self {
        let mut last = [ABSENT; 256];
        for (i, &byte) in pattern.iter().enumerate() {
            last[byte as usize] = i as isize;
        }
        Self { last }
    }

    /// Index of the last occurrence of `byte` in the pattern, or [`ABSENT`].
    #[inline]
    pub fn last_occurrence(&self, byte: u8) -> isize {
        self.last[byte as usize]
    }

    /// Number of distinct byte values in the pattern
    pub fn distinct_bytes(&self) -> usize {
        self.last.iter().filter(|&&idx| idx != ABSENT).count()
    }

    /// Bad-character shift for a mismatch of `byte` at pattern index `j`.
    ///
    /// Negative when the byte's last occurrence lies right of `j`; the
    /// matcher clamps the final shift to at least one.
    #[inline]
    pub fn shift(&self, j: usize, byte: u8) -> isize {
        j as isize - self.last_occurrence(byte)
    }
}

impl std::fmt::Debug for BadCharTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Only the bytes that occur; 256 sentinels are noise.
        f.debug_map()
            .entries(
                self.last
                    .iter()
                    .enumerate()
                    .filter(|(_, idx)| **idx != ABSENT)
                    .map(|(byte, idx)| (byte as u8 as char, *idx)),
            )
            .finish()
    }
}
