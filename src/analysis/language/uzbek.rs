use std::sync::LazyLock;
use regex::Regex;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::core::error::{Error, Result};

/// Apostrophe-style letters of Uzbek Latin script (o‘, g‘, ma'no).
/// Documents mix the curly and the straight form.
pub const DEFAULT_MODIFIERS: [char; 2] = ['\u{2018}', '\''];

static DEFAULT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&word_pattern(&DEFAULT_MODIFIERS)).expect("default word pattern compiles")
});

fn word_pattern(modifiers: &[char]) -> String {
    let class: String = modifiers
        .iter()
        .map(|c| regex::escape(c.encode_utf8(&mut [0u8; 4])))
        .collect();

    format!(r"[{}{}]+", WORD_CLASS, class)
}

/// Letters, numbers of any kind, and `_`. Combining marks and other
/// connector punctuation end a word.
const WORD_CLASS: &str = r"\p{L}\p{N}_";

/// Uzbek tokenizer
///
/// Tokens are maximal runs of word characters (letters, numbers, `_`) plus
/// the configured modifier characters, in the order they appear. A modifier
/// can sit inside a word but never start or end one. Case is left untouched.
#[derive(Clone)]
pub struct UzbekTokenizer {
    pattern: Regex,
    modifiers: Vec<char>,
}

impl UzbekTokenizer {
    pub fn new() -> Self {
        UzbekTokenizer {
            pattern: DEFAULT_PATTERN.clone(),
            modifiers: DEFAULT_MODIFIERS.to_vec(),
        }
    }

    /// Default modifiers plus `extra` (e.g. `’` or `` ` `` for sources that
    /// use them for o‘/g‘).
    pub fn with_extra_modifiers<I>(extra: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let mut modifiers = DEFAULT_MODIFIERS.to_vec();
        for c in extra {
            // word characters already match
            if c == '_' || c.is_alphanumeric() {
                continue;
            }
            if !modifiers.contains(&c) {
                modifiers.push(c);
            }
        }

        if modifiers.len() == DEFAULT_MODIFIERS.len() {
            return Ok(UzbekTokenizer::new());
        }

        let pattern = Regex::new(&word_pattern(&modifiers))
            .map_err(|e| Error::invalid_argument(format!("word pattern: {}", e)))?;

        Ok(UzbekTokenizer { pattern, modifiers })
    }

    pub fn modifiers(&self) -> &[char] {
        &self.modifiers
    }
}

impl Default for UzbekTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for UzbekTokenizer {
    /// Each run of word and modifier characters yields at most one token:
    /// the run with its leading and trailing modifiers cut off. A run of
    /// modifiers alone yields nothing.
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let is_modifier = |c: char| self.modifiers.contains(&c);
        let mut tokens = Vec::new();

        for run in self.pattern.find_iter(text) {
            let trimmed_start = run.as_str().trim_start_matches(is_modifier);
            let word = trimmed_start.trim_end_matches(is_modifier);
            if word.is_empty() {
                continue;
            }

            let offset = run.start() + (run.as_str().len() - trimmed_start.len());
            tokens.push(Token::new(word.to_string(), tokens.len() as u32, offset));
        }

        tokens
    }

    fn name(&self) -> &str {
        "uzbek"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}
