use std::collections::BTreeSet;
use std::sync::Arc;
use log::debug;
use crate::analysis::analyzer::Analyzer;
use crate::analysis::filters::stopword::StopWordFilter;
use crate::analysis::frequency::{FrequencyAnalyzer, FrequencyTable};
use crate::analysis::language::uzbek::UzbekTokenizer;
use crate::analysis::stopwords::StopWordSet;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::types::AnalysisResult;

/// Stop word and frequency analysis over plain text.
///
/// Holds no per-call state; the stop word set is shared read-only, so one
/// engine can serve any number of concurrent callers.
pub struct TextEngine {
    tokenizer: Box<dyn Tokenizer>,
    stop_words: Arc<StopWordSet>,
    stop_filter: StopWordFilter,
    content_words: Analyzer,     // tokenizer + stop word removal
    frequency: FrequencyAnalyzer,
}

impl TextEngine {
    pub fn new(stop_words: StopWordSet) -> Self {
        TextEngine::with_tokenizer(
            Box::new(UzbekTokenizer::new()),
            stop_words,
            FrequencyAnalyzer::default(),
        )
    }

    pub fn with_tokenizer(
        tokenizer: Box<dyn Tokenizer>,
        stop_words: StopWordSet,
        frequency: FrequencyAnalyzer,
    ) -> Self {
        let stop_words = Arc::new(stop_words);
        let content_words = Analyzer::with_stop_words(tokenizer.clone_box(), Arc::clone(&stop_words));

        TextEngine {
            tokenizer,
            stop_filter: StopWordFilter::new(Arc::clone(&stop_words)),
            stop_words,
            content_words,
            frequency,
        }
    }

    /// Load stop words from `config.stop_words_path` and build the tokenizer
    /// with any extra modifier characters.
    pub fn from_config(config: &Config) -> Result<Self> {
        let stop_words = StopWordSet::load(&config.stop_words_path)?;
        let tokenizer = UzbekTokenizer::with_extra_modifiers(config.extra_modifiers.iter().copied())?;

        Ok(TextEngine::with_tokenizer(
            Box::new(tokenizer),
            stop_words,
            FrequencyAnalyzer::new(config.frequency_limit),
        ))
    }

    /// New engine with the stop word source re-read; `self` is unchanged.
    pub fn reload(&self) -> Result<Self> {
        let stop_words = self.stop_words.reload()?;
        Ok(TextEngine::with_tokenizer(
            self.tokenizer.clone_box(),
            stop_words,
            self.frequency,
        ))
    }

    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.tokenizer.tokenize(text)
    }

    /// Distinct stop words in `text`, lowercase
    pub fn find_stop_words(&self, text: &str) -> BTreeSet<String> {
        let tokens = self.tokenizer.tokenize(&text.to_lowercase());
        self.stop_filter.find(&tokens)
    }

    /// `text` minus its stop words, remaining words joined by single spaces
    pub fn remove_stop_words(&self, text: &str) -> String {
        let kept = self.content_words.analyze(text);
        StopWordFilter::join(&kept)
    }

    pub fn frequencies(&self, text: &str) -> FrequencyTable {
        let tokens = self.tokenizer.tokenize(&text.to_lowercase());
        FrequencyTable::from_tokens(&tokens)
    }

    /// One pass over the lowercased text feeds both the stop word lookup and
    /// the frequency table; stop word removal runs on the original case.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let lowered = self.tokenizer.tokenize(&text.to_lowercase());
        let stop_words = self.stop_filter.find(&lowered);
        let table = FrequencyTable::from_tokens(&lowered);
        let edited_text = self.remove_stop_words(text);
        let summary = self.frequency.summarize(&table);

        debug!(
            "Analyzed {} tokens ({} distinct, {} stop words)",
            table.total(),
            table.distinct(),
            stop_words.len()
        );

        AnalysisResult::new(
            text.to_string(),
            stop_words,
            edited_text,
            summary.most_frequent,
            summary.least_frequent,
        )
    }
}
