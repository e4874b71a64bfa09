use std::fmt::Write;
use crate::core::types::{AnalysisResult, WordCount};

/// `word: count` pairs, comma separated
pub fn format_pairs(pairs: &[WordCount]) -> String {
    pairs
        .iter()
        .map(|(word, count)| format!("{}: {}", word, count))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_words<'a>(words: impl IntoIterator<Item = &'a String>) -> String {
    words
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Labeled plain-text report carrying the same data as the JSON document
pub fn render(result: &AnalysisResult) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = write!(out, "Original text:\n{}\n\n", result.original_text());
    let _ = write!(out, "Stop words:\n{}\n\n", format_words(result.stop_words()));
    let _ = write!(out, "Edited text:\n{}\n\n", result.edited_text());
    let _ = write!(out, "Most frequent words:\n{}\n\n", format_pairs(result.most_frequent()));
    let _ = write!(out, "Least frequent words:\n{}\n", format_pairs(result.least_frequent()));

    out
}
