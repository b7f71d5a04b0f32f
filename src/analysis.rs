//! Text analysis: the tokenizer contract and the bundled tokenizers.

pub mod standard;
pub mod whitespace;

use std::fmt::Debug;

/// Converts raw field text into a sequence of normalized terms.
///
/// Implementations must be deterministic for identical input and safe on
/// arbitrary Unicode. The engine uses returned terms as index keys verbatim,
/// so all normalization (case folding included) happens here.
pub trait Tokenizer: Send + Sync + Debug {
    /// Name of this tokenizer, for diagnostics.
    fn name(&self) -> &'static str;

    /// Split `text` into normalized terms.
    fn tokenize(&self, text: &str) -> Vec<String>;
}
