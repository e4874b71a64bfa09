use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};
use log::{info, warn};
use crate::core::error::Result;

/// Immutable set of lowercase stop words.
///
/// Built once (usually from a one-word-per-line file) and shared read-only.
/// Picking up edits to the source file means building a new set with
/// [`StopWordSet::reload`], never mutating this one.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: HashSet<String>,
    ordered: Vec<String>,      // first-seen order, for listing
    source: Option<PathBuf>,
}

impl StopWordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = StopWordSet::default();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            if set.words.insert(word.clone()) {
                set.ordered.push(word);
            }
        }
        set
    }

    pub fn empty() -> Self {
        StopWordSet::default()
    }

    /// One word per line; lines are trimmed and lowercased, blank lines skipped.
    pub fn parse(contents: &str) -> Self {
        StopWordSet::new(contents.lines())
    }

    /// Load from a word-list file.
    ///
    /// A missing file yields an empty set and a warning. Any other read
    /// failure is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut set = match fs::read_to_string(path) {
            Ok(contents) => {
                let set = StopWordSet::parse(&contents);
                info!("Loaded {} stop words from {}", set.len(), path.display());
                set
            }
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                warn!("Stop word file {} not found, continuing without stop words", path.display());
                StopWordSet::empty()
            }
            Err(e) => return Err(e.into()),
        };

        set.source = Some(path.to_path_buf());
        Ok(set)
    }

    /// Re-read the source file into a fresh set. Sets built in memory have
    /// no source and reload to a copy of themselves.
    pub fn reload(&self) -> Result<Self> {
        match &self.source {
            Some(path) => StopWordSet::load(path),
            None => Ok(self.clone()),
        }
    }

    /// `word` must already be lowercase.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
