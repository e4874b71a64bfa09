use std::collections::BTreeSet;
use serde::{Serialize, Deserialize};

/// Lowercase word paired with its occurrence count
pub type WordCount = (String, usize);

/// Outcome of one analysis call.
///
/// Field names serialize as the labels used in `output.json` and the HTTP
/// response. Frequency lists serialize as `[word, count]` arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "Original text")]
    original_text: String,
    #[serde(rename = "Stop words")]
    stop_words: BTreeSet<String>,
    #[serde(rename = "Edited text")]
    edited_text: String,
    #[serde(rename = "Most frequent words")]
    most_frequent: Vec<WordCount>,
    #[serde(rename = "Least frequent words")]
    least_frequent: Vec<WordCount>,
}

impl AnalysisResult {
    pub fn new(
        original_text: String,
        stop_words: BTreeSet<String>,
        edited_text: String,
        most_frequent: Vec<WordCount>,
        least_frequent: Vec<WordCount>,
    ) -> Self {
        AnalysisResult {
            original_text,
            stop_words,
            edited_text,
            most_frequent,
            least_frequent,
        }
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// Distinct stop words found. Ordered only so output is stable.
    pub fn stop_words(&self) -> &BTreeSet<String> {
        &self.stop_words
    }

    pub fn edited_text(&self) -> &str {
        &self.edited_text
    }

    pub fn most_frequent(&self) -> &[WordCount] {
        &self.most_frequent
    }

    pub fn least_frequent(&self) -> &[WordCount] {
        &self.least_frequent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_keys_and_pair_shape() {
        let result = AnalysisResult::new(
            "Bu kitob".to_string(),
            BTreeSet::from(["bu".to_string()]),
            "kitob".to_string(),
            vec![("bu".to_string(), 1), ("kitob".to_string(), 1)],
            vec![("kitob".to_string(), 1), ("bu".to_string(), 1)],
        );

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["Original text"], "Bu kitob");
        assert_eq!(value["Stop words"], serde_json::json!(["bu"]));
        assert_eq!(value["Edited text"], "kitob");
        assert_eq!(value["Most frequent words"][0], serde_json::json!(["bu", 1]));
        assert_eq!(value["Least frequent words"][0], serde_json::json!(["kitob", 1]));
    }
}
