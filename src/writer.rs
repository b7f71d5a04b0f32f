//! Write path orchestration.

use std::borrow::Cow;
use std::sync::Arc;

use ahash::AHashSet;
use log::debug;
use parking_lot::RwLock;

use crate::analysis::Tokenizer;
use crate::data::{DataValue, DocId, Document};
use crate::index::inverted::InvertedIndex;
use crate::store::document::DocumentStore;

/// Statistics about the writing process.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriterStats {
    /// Number of documents added through this writer.
    pub documents_added: u64,
    /// Total distinct terms written across all documents.
    pub terms_written: u64,
}

/// Feeds documents into the document store and the inverted index.
///
/// The writer owns the only write path: it derives the document's term set
/// through the tokenizer, hands the document to the store for an ID, and
/// records the postings under that ID.
pub struct IndexWriter {
    index: Arc<RwLock<InvertedIndex>>,
    store: Arc<RwLock<DocumentStore>>,
    tokenizer: Arc<dyn Tokenizer>,
    stats: WriterStats,
}

impl IndexWriter {
    /// Create a writer over shared index and store handles.
    pub fn new(
        index: Arc<RwLock<InvertedIndex>>,
        store: Arc<RwLock<DocumentStore>>,
        tokenizer: Arc<dyn Tokenizer>,
    ) -> Self {
        Self {
            index,
            store,
            tokenizer,
            stats: WriterStats::default(),
        }
    }

    /// Add `document` to the engine, deriving its terms with the tokenizer.
    ///
    /// Every field value is stringified and tokenized, and the per-field term
    /// sets are merged into one flat set before indexing; a term is not
    /// attributed to the field it came from.
    pub fn add_document(&mut self, document: Document) -> DocId {
        let mut terms = AHashSet::new();
        for value in document.fields.values() {
            if let Some(text) = value_text(value) {
                terms.extend(self.tokenizer.tokenize(&text));
            }
        }
        self.index_terms(document, terms)
    }

    /// Add `document` with externally computed `terms`, skipping tokenization.
    ///
    /// The terms are indexed verbatim; callers are responsible for whatever
    /// normalization their query side expects.
    pub fn add_document_with_terms<I>(&mut self, document: Document, terms: I) -> DocId
    where
        I: IntoIterator<Item = String>,
    {
        self.index_terms(document, terms.into_iter().collect())
    }

    fn index_terms(&mut self, document: Document, terms: AHashSet<String>) -> DocId {
        let term_count = terms.len();
        let doc_id = self.store.write().add(document);
        self.index.write().index_document(doc_id, terms);

        self.stats.documents_added += 1;
        self.stats.terms_written += term_count as u64;
        debug!("indexed document {doc_id} with {term_count} terms");
        doc_id
    }

    /// Counters for this writer.
    pub fn stats(&self) -> WriterStats {
        self.stats
    }
}

/// Text rendering of a field value for tokenization.
fn value_text(value: &DataValue) -> Option<Cow<'_, str>> {
    match value {
        DataValue::Text(text) => Some(Cow::Borrowed(text)),
        DataValue::Bool(b) => Some(Cow::Owned(b.to_string())),
        DataValue::Int64(num) => Some(Cow::Owned(num.to_string())),
        DataValue::Float64(num) => Some(Cow::Owned(num.to_string())),
        DataValue::DateTime(dt) => Some(Cow::Owned(dt.to_rfc3339())),
        DataValue::List(items) => Some(Cow::Owned(items.join(" "))),
        // Null carries no text
        DataValue::Null => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::whitespace::WhitespaceTokenizer;

    fn create_test_writer() -> (
        IndexWriter,
        Arc<RwLock<InvertedIndex>>,
        Arc<RwLock<DocumentStore>>,
    ) {
        let index = Arc::new(RwLock::new(InvertedIndex::new()));
        let store = Arc::new(RwLock::new(DocumentStore::new()));
        let writer = IndexWriter::new(
            index.clone(),
            store.clone(),
            Arc::new(WhitespaceTokenizer::new()),
        );
        (writer, index, store)
    }

    #[test]
    fn test_add_document_tokenizes_every_field() {
        let (mut writer, index, store) = create_test_writer();

        let doc_id = writer.add_document(
            Document::new()
                .add_text("title", "Hello World")
                .add_text("body", "greetings"),
        );

        assert_eq!(doc_id, 0);
        assert_eq!(store.read().len(), 1);

        let index = index.read();
        assert!(index.document_ids_for("hello").contains(&0));
        assert!(index.document_ids_for("world").contains(&0));
        assert!(index.document_ids_for("greetings").contains(&0));
    }

    #[test]
    fn test_non_text_fields_are_stringified() {
        let (mut writer, index, _store) = create_test_writer();

        let doc_id = writer.add_document(
            Document::new()
                .add_integer("year", 2024)
                .add_boolean("published", true)
                .add_list("tags", vec!["rust".to_string(), "search".to_string()])
                .add_field("note", DataValue::Null),
        );

        let index = index.read();
        assert!(index.document_ids_for("2024").contains(&doc_id));
        assert!(index.document_ids_for("true").contains(&doc_id));
        assert!(index.document_ids_for("rust").contains(&doc_id));
        assert!(index.document_ids_for("search").contains(&doc_id));
        // Null contributed nothing
        assert_eq!(index.term_count(), 4);
    }

    #[test]
    fn test_add_document_with_terms_skips_tokenization() {
        let (mut writer, index, _store) = create_test_writer();

        let doc_id = writer.add_document_with_terms(
            Document::new().add_text("title", "ignored text"),
            ["Precomputed".to_string(), "terms".to_string()],
        );

        let index = index.read();
        // Caller terms go in verbatim, no case folding
        assert!(index.document_ids_for("Precomputed").contains(&doc_id));
        assert!(index.document_ids_for("precomputed").is_empty());
        assert!(index.document_ids_for("terms").contains(&doc_id));
        // The field text was never tokenized
        assert!(index.document_ids_for("ignored").is_empty());
    }

    #[test]
    fn test_writer_stats_accumulate() {
        let (mut writer, _index, _store) = create_test_writer();

        writer.add_document(Document::new().add_text("title", "one two three"));
        writer.add_document(Document::new().add_text("title", "four"));

        let stats = writer.stats();
        assert_eq!(stats.documents_added, 2);
        assert_eq!(stats.terms_written, 4);
    }

    #[test]
    fn test_duplicate_tokens_count_once() {
        let (mut writer, index, _store) = create_test_writer();

        writer.add_document(Document::new().add_text("body", "echo echo echo"));

        assert_eq!(writer.stats().terms_written, 1);
        assert_eq!(index.read().posting_list("echo").unwrap().len(), 1);
    }
}
