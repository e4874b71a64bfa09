use std::collections::BTreeSet;
use std::sync::Arc;
use crate::analysis::filter::TokenFilter;
use crate::analysis::stopwords::StopWordSet;
use crate::analysis::token::Token;

/// Matches tokens against a [`StopWordSet`] by their lowercase form.
#[derive(Clone)]
pub struct StopWordFilter {
    pub stop_words: Arc<StopWordSet>,
}

impl StopWordFilter {
    pub fn new(stop_words: Arc<StopWordSet>) -> Self {
        StopWordFilter { stop_words }
    }

    /// Distinct lowercase stop words present in `tokens`
    pub fn find(&self, tokens: &[Token]) -> BTreeSet<String> {
        tokens
            .iter()
            .map(Token::lowercase)
            .filter(|word| self.stop_words.contains(word))
            .collect()
    }

    /// Surviving tokens joined by single spaces. Original spacing and
    /// punctuation between words is not kept.
    pub fn join(tokens: &[Token]) -> String {
        tokens
            .iter()
            .map(|token| token.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl TokenFilter for StopWordFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter()
            .filter(|token| !self.stop_words.contains(&token.lowercase()))
            .collect()
    }

    fn name(&self) -> &str {
        "stop_words"
    }

    fn clone_box(&self) -> Box<dyn TokenFilter> {
        Box::new(StopWordFilter {
            stop_words: Arc::clone(&self.stop_words),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::language::uzbek::UzbekTokenizer;
    use crate::analysis::tokenizer::Tokenizer;

    fn filter() -> StopWordFilter {
        StopWordFilter::new(Arc::new(StopWordSet::new(["va", "bu"])))
    }

    #[test]
    fn test_filter_compares_lowercase_form() {
        let tokens = UzbekTokenizer::new().tokenize("Bu kitob VA daftar");
        let kept = filter().filter(tokens);
        assert_eq!(StopWordFilter::join(&kept), "kitob daftar");
    }

    #[test]
    fn test_find_deduplicates() {
        let tokens = UzbekTokenizer::new().tokenize("bu va bu Va kitob");
        let found = filter().find(&tokens);
        assert_eq!(found, BTreeSet::from(["bu".to_string(), "va".to_string()]));
    }

    #[test]
    fn test_empty_set_keeps_everything() {
        let filter = StopWordFilter::new(Arc::new(StopWordSet::empty()));
        let tokens = UzbekTokenizer::new().tokenize("bu va kitob");
        assert_eq!(filter.filter(tokens.clone()), tokens);
        assert!(filter.find(&tokens).is_empty());
    }
}
