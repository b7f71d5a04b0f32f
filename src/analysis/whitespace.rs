//! Whitespace tokenizer.

use super::Tokenizer;

/// Case-folds the input and splits it on Unicode whitespace.
///
/// Punctuation stays attached to its word ("world!" is one term), so this
/// tokenizer suits pre-cleaned text and tests more than natural prose.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn name(&self) -> &'static str {
        "whitespace"
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_lowercase).collect()
    }
}
