//! Engine composition root.

pub mod config;

use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use crate::data::{DocId, Document};
use crate::error::Result;
use crate::index::Operator;
use crate::index::inverted::{IndexStats, InvertedIndex};
use crate::searcher::Searcher;
use crate::store::document::DocumentStore;
use crate::writer::{IndexWriter, WriterStats};

use self::config::EngineConfig;

/// Counters across the engine's parts.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineStats {
    /// Number of stored documents.
    pub document_count: usize,
    /// Index counters.
    pub index: IndexStats,
    /// Writer counters.
    pub writer: WriterStats,
}

/// The assembled search engine.
///
/// Owns one inverted index and one document store, shared between one
/// [`IndexWriter`] and one [`Searcher`]. Write operations take `&mut self`,
/// so the engine is single-writer by construction, while searches only need
/// `&self`.
///
/// # Example
///
/// ```
/// use calluna::{Document, Engine, Operator};
///
/// # fn main() -> calluna::Result<()> {
/// let mut engine = Engine::default();
/// engine.add_document(Document::new().add_text("title", "hello world"));
/// engine.add_document(Document::new().add_text("title", "hello there"));
///
/// let mut hits = engine.search(&["hello"], Operator::And)?;
/// hits.sort_unstable();
/// assert_eq!(hits, vec![0, 1]);
/// # Ok(())
/// # }
/// ```
pub struct Engine {
    index: Arc<RwLock<InvertedIndex>>,
    store: Arc<RwLock<DocumentStore>>,
    writer: IndexWriter,
    searcher: Searcher,
}

impl Engine {
    /// Assemble an engine from `config`.
    pub fn new(config: EngineConfig) -> Self {
        let index = Arc::new(RwLock::new(InvertedIndex::new()));
        let store = Arc::new(RwLock::new(DocumentStore::new()));

        let writer = IndexWriter::new(index.clone(), store.clone(), config.tokenizer.clone());
        let searcher = Searcher::new(index.clone(), store.clone());
        debug!("engine ready with tokenizer {}", config.tokenizer.name());

        Self {
            index,
            store,
            writer,
            searcher,
        }
    }

    /// Tokenize and index `document`, returning its assigned ID.
    pub fn add_document(&mut self, document: Document) -> DocId {
        self.writer.add_document(document)
    }

    /// Index `document` under externally computed `terms`.
    pub fn add_document_with_terms<I>(&mut self, document: Document, terms: I) -> DocId
    where
        I: IntoIterator<Item = String>,
    {
        self.writer.add_document_with_terms(document, terms)
    }

    /// Run a boolean query; see [`Searcher::search`].
    pub fn search<S: AsRef<str>>(&self, terms: &[S], operator: Operator) -> Result<Vec<DocId>> {
        self.searcher.search(terms, operator)
    }

    /// Fetch documents by ID; see [`Searcher::retrieve`].
    pub fn retrieve(&self, doc_ids: &[DocId]) -> Result<Vec<Document>> {
        self.searcher.retrieve(doc_ids)
    }

    /// Handle on the shared inverted index.
    ///
    /// Useful for introspection and for merging payloads into postings
    /// through [`InvertedIndex::posting_list_mut`].
    pub fn index(&self) -> Arc<RwLock<InvertedIndex>> {
        self.index.clone()
    }

    /// Handle on the shared document store.
    pub fn document_store(&self) -> Arc<RwLock<DocumentStore>> {
        self.store.clone()
    }

    /// Counters across index, store, and writer.
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            document_count: self.store.read().len(),
            index: self.index.read().stats(),
            writer: self.writer.stats(),
        }
    }
}

impl Default for Engine {
    /// An engine with the default configuration (standard tokenizer).
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
