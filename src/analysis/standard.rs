//! Standard tokenizer.

use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use super::Tokenizer;

/// Splits text on Unicode word boundaries and case-folds each word.
///
/// Input is NFC-normalized first so composed and decomposed spellings of the
/// same character produce the same term. Punctuation never reaches the index.
/// This is the default tokenizer of the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTokenizer;

impl StandardTokenizer {
    /// Create a new standard tokenizer.
    pub fn new() -> Self {
        StandardTokenizer
    }
}

impl Tokenizer for StandardTokenizer {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized: String = text.nfc().collect();
        normalized
            .unicode_words()
            .map(str::to_lowercase)
            .collect()
    }
}
