use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use uztext::analysis::language::uzbek::UzbekTokenizer;
use uztext::analysis::tokenizer::Tokenizer;
use uztext::{StopWordSet, TextEngine};

const STOP_WORDS: &[&str] = &["va", "bu", "u", "bilan", "uchun", "ham", "lekin", "esa", "juda", "har"];

/// Helper to create Uzbek-like text of `word_count` words
fn create_test_text(word_count: usize) -> String {
    let mut rng = rand::thread_rng();
    let words = [
        "va", "bu", "kitob", "O‘zbekiston", "ma'no", "bilan", "daftar", "g‘alaba",
        "uchun", "Toshkent", "maktab", "juda", "foydali", "o‘quvchi", "ham", "til",
    ];

    (0..word_count)
        .map(|i| {
            let word = words[rng.gen_range(0..words.len())];
            if i % 12 == 11 { format!("{}.", word) } else { word.to_string() }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Benchmark tokenization alone
fn bench_tokenize(c: &mut Criterion) {
    let tokenizer = UzbekTokenizer::new();
    let text = create_test_text(1_000);

    c.bench_function("tokenize_1000_words", |b| {
        b.iter(|| tokenizer.tokenize(black_box(&text)));
    });
}

/// Benchmark full analysis across text sizes
fn bench_analyze(c: &mut Criterion) {
    let engine = TextEngine::new(StopWordSet::new(STOP_WORDS.iter().copied()));
    let mut group = c.benchmark_group("analyze");

    for word_count in [100, 1_000, 10_000, 100_000].iter() {
        let text = create_test_text(*word_count);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(word_count),
            &text,
            |b, text| {
                b.iter(|| engine.analyze(black_box(text)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_analyze);
criterion_main!(benches);
