//! Engine configuration.

use std::fmt;
use std::sync::Arc;

use crate::analysis::Tokenizer;
use crate::analysis::standard::StandardTokenizer;

/// Configuration for [`Engine`](crate::engine::Engine).
#[derive(Clone)]
pub struct EngineConfig {
    /// Tokenizer applied to field values on the write path.
    pub tokenizer: Arc<dyn Tokenizer>,
}

impl EngineConfig {
    /// Configuration with the standard tokenizer.
    pub fn new() -> Self {
        Self {
            tokenizer: Arc::new(StandardTokenizer::new()),
        }
    }

    /// Replace the tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineConfig")
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}
