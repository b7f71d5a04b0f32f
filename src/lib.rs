//! # Calluna
//!
//! A minimal in-memory full-text search library for Rust.
//!
//! Documents enter through the [`Engine`] facade, which tokenizes their
//! field values and builds an inverted index mapping each term to the
//! documents containing it. Conjunctive (AND) queries intersect the posting
//! lists of their terms and come back as document IDs that can be joined to
//! the stored documents.
//!
//! ## Quick start
//!
//! ```
//! use calluna::{Document, Engine, Operator};
//!
//! # fn main() -> calluna::Result<()> {
//! let mut engine = Engine::default();
//! let id = engine.add_document(
//!     Document::new()
//!         .add_text("title", "hello world")
//!         .add_text("body", "a minimal search engine"),
//! );
//!
//! let hits = engine.search(&["minimal", "search"], Operator::And)?;
//! assert_eq!(hits, vec![id]);
//!
//! let docs = engine.retrieve(&hits)?;
//! assert_eq!(
//!     docs[0].get("title").and_then(|v| v.as_text()),
//!     Some("hello world")
//! );
//! # Ok(())
//! # }
//! ```
pub mod analysis;
mod data;
mod engine;
mod error;
pub mod index;
mod searcher;
mod store;
mod writer;

// Re-exports for the public API
pub use analysis::Tokenizer;
pub use analysis::standard::StandardTokenizer;
pub use analysis::whitespace::WhitespaceTokenizer;
pub use data::{DataValue, DocId, Document};
pub use engine::config::EngineConfig;
pub use engine::{Engine, EngineStats};
pub use error::{CallunaError, Result};
pub use index::Operator;
pub use index::inverted::{IndexStats, InvertedIndex};
pub use index::posting::{Payload, PostingList};
pub use searcher::Searcher;
pub use store::document::DocumentStore;
pub use writer::{IndexWriter, WriterStats};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
