#![no_main]

use bmsearch::search::{suffix_lengths, GoodSuffixTables};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|pattern: &[u8]| {
    // Table invariants must hold for arbitrary patterns
    let m = pattern.len();
    let suff = suffix_lengths(pattern);
    let tables = GoodSuffixTables::build(pattern);

    assert_eq!(suff.len(), m);
    assert!(suff.iter().enumerate().all(|(k, &len)| len <= k + 1));
    assert_eq!(tables.little_l.len(), m + 1);
    assert!(tables.little_l.iter().all(|&v| v <= m));
    assert!(tables.big_l.iter().skip(1).all(|&v| (1..=m).contains(&v)));
});
