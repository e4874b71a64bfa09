use std::sync::Arc;
use crate::analysis::filter::TokenFilter;
use crate::analysis::filters::stopword::StopWordFilter;
use crate::analysis::language::uzbek::UzbekTokenizer;
use crate::analysis::stopwords::StopWordSet;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;

/// Text analysis pipeline
pub struct Analyzer {
    pub tokenizer: Box<dyn Tokenizer>,
    pub filters: Vec<Box<dyn TokenFilter>>,
    pub name: String,
}

impl Analyzer {
    pub fn new(name: String, tokenizer: Box<dyn Tokenizer>) -> Self {
        Analyzer {
            tokenizer,
            filters: Vec::new(),
            name,
        }
    }

    pub fn add_filter(mut self, filter: Box<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn analyze(&self, text: &str) -> Vec<Token> {
        let mut tokens = self.tokenizer.tokenize(text);

        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }

        tokens
    }

    /// Uzbek tokens with stop words dropped, original case kept
    pub fn uzbek_content_words(stop_words: Arc<StopWordSet>) -> Self {
        Analyzer::with_stop_words(Box::new(UzbekTokenizer::new()), stop_words)
    }

    pub fn with_stop_words(tokenizer: Box<dyn Tokenizer>, stop_words: Arc<StopWordSet>) -> Self {
        let name = format!("{}_content_words", tokenizer.name());
        Analyzer::new(name, tokenizer)
            .add_filter(Box::new(StopWordFilter::new(stop_words)))
    }
}

impl Clone for Analyzer {
    fn clone(&self) -> Self {
        Analyzer {
            tokenizer: self.tokenizer.clone_box(),
            filters: self.filters.iter().map(|f| f.clone_box()).collect(),
            name: self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uzbek_content_words() {
        let stop_words = Arc::new(StopWordSet::new(["va", "bu", "juda"]));
        let analyzer = Analyzer::uzbek_content_words(stop_words);
        assert_eq!(analyzer.name, "uzbek_content_words");

        let tokens = analyzer.analyze("Bu kitob va daftar juda foydali.");
        let words: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["kitob", "daftar", "foydali"]);
        // positions still refer to the unfiltered sequence
        assert_eq!(tokens[1].position, 3);
    }

    #[test]
    fn test_clone_keeps_filters() {
        let analyzer = Analyzer::uzbek_content_words(Arc::new(StopWordSet::new(["va"])));
        let cloned = analyzer.clone();
        assert_eq!(cloned.filters.len(), 1);
        assert_eq!(cloned.filters[0].name(), "stop_words");
        assert_eq!(cloned.analyze("olma va nok").len(), 2);
    }
}
