//! Search benchmarks for bmsearch
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`

use bmsearch::search::{search, BadCharTable, BoyerMoore, GoodSuffixTables};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn english_text(len: usize) -> Vec<u8> {
    let sample = b"It is a truth universally acknowledged, that a single man in \
possession of a good fortune, must be in want of a wife. However little known the \
feelings or views of such a man may be on his first entering a neighbourhood, this \
truth is so well fixed in the minds of the surrounding families. ";
    sample.iter().copied().cycle().take(len).collect()
}

fn naive(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, w)| *w == pattern)
        .map(|(i, _)| i)
        .collect()
}

fn bench_preprocessing(c: &mut Criterion) {
    let long = vec![b'a'; 256];
    let patterns: [&[u8]; 3] = [b"wife", b"surrounding families", &long];

    let mut group = c.benchmark_group("preprocessing");
    for pattern in patterns {
        group.bench_with_input(
            BenchmarkId::new("bad_char", pattern.len()),
            &pattern,
            |b, p| b.iter(|| BadCharTable::build(black_box(p))),
        );
        group.bench_with_input(
            BenchmarkId::new("good_suffix", pattern.len()),
            &pattern,
            |b, p| b.iter(|| GoodSuffixTables::build(black_box(p))),
        );
    }
    group.finish();
}

fn bench_english(c: &mut Criterion) {
    let text = english_text(1 << 20);
    let patterns: [&[u8]; 3] = [b"wife", b"neighbourhood", b"surrounding families, zebra"];

    let mut group = c.benchmark_group("english_1mb");
    group.throughput(Throughput::Bytes(text.len() as u64));

    for pattern in patterns {
        let label = String::from_utf8_lossy(pattern).to_string();
        let bm = BoyerMoore::new(pattern).unwrap();

        group.bench_with_input(BenchmarkId::new("boyer_moore", &label), &pattern, |b, _| {
            b.iter(|| bm.find_all(black_box(&text)))
        });
        group.bench_with_input(BenchmarkId::new("search_fn", &label), &pattern, |b, p| {
            b.iter(|| search(black_box(&text), black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("naive", &label), &pattern, |b, p| {
            b.iter(|| naive(black_box(&text), black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("memmem", &label), &pattern, |b, p| {
            let finder = memchr::memmem::Finder::new(p);
            b.iter(|| finder.find_iter(black_box(&text)).count())
        });
    }
    group.finish();
}

fn bench_repetitive(c: &mut Criterion) {
    // Worst case for skipping: everything matches except the first byte.
    let text = vec![b'a'; 1 << 18];
    let mut pattern = vec![b'a'; 64];
    pattern[0] = b'b';
    let bm = BoyerMoore::new(&pattern).unwrap();

    let mut group = c.benchmark_group("repetitive_256kb");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("boyer_moore", |b| b.iter(|| bm.count(black_box(&text))));
    group.bench_function("naive", |b| b.iter(|| naive(black_box(&text), &pattern).len()));
    group.finish();
}

criterion_group!(benches, bench_preprocessing, bench_english, bench_repetitive);

criterion_main!(benches);
