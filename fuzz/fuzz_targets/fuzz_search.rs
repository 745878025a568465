#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    pattern: &'a [u8],
    text: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    // Boyer-Moore must agree with a naive scan on arbitrary bytes
    let found = bmsearch::search(input.text, input.pattern);

    let m = input.pattern.len();
    let expected: Vec<usize> = if m == 0 || m > input.text.len() {
        Vec::new()
    } else {
        input
            .text
            .windows(m)
            .enumerate()
            .filter(|(_, w)| *w == input.pattern)
            .map(|(i, _)| i)
            .collect()
    };

    assert_eq!(found, expected);
});
