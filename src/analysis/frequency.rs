use std::collections::HashMap;
use crate::analysis::token::Token;
use crate::core::types::WordCount;

/// Case-insensitive word counts, kept in first-seen order
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<WordCount>,
    index: HashMap<String, usize>,   // word -> slot in `entries`
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable::default()
    }

    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut table = FrequencyTable::new();
        for token in tokens {
            table.record(&token.lowercase());
        }
        table
    }

    pub fn record(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), 1));
            }
        }
    }

    pub fn count(&self, word: &str) -> usize {
        self.index
            .get(word)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Sum of all counts, equal to the number of tokens recorded
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every entry by descending count. The sort is stable, so equal counts
    /// stay in first-seen order.
    pub fn most_common(&self) -> Vec<WordCount> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencySummary {
    pub most_frequent: Vec<WordCount>,
    pub least_frequent: Vec<WordCount>,
}

/// Picks the head and tail of a [`FrequencyTable`]
#[derive(Debug, Clone, Copy)]
pub struct FrequencyAnalyzer {
    pub limit: usize,
}

impl FrequencyAnalyzer {
    pub fn new(limit: usize) -> Self {
        FrequencyAnalyzer { limit }
    }

    pub fn summarize(&self, table: &FrequencyTable) -> FrequencySummary {
        let ranked = table.most_common();

        // The tail is the last `limit` entries of the ranking read backwards,
        // not an ascending sort: ties come out in reverse first-seen order.
        let least_frequent = ranked.iter().rev().take(self.limit).cloned().collect();
        let most_frequent = ranked.into_iter().take(self.limit).collect();

        FrequencySummary {
            most_frequent,
            least_frequent,
        }
    }
}

impl Default for FrequencyAnalyzer {
    fn default() -> Self {
        FrequencyAnalyzer::new(5)
    }
}
