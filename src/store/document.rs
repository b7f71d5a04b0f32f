//! Append-only document storage.

use crate::data::{DocId, Document};
use crate::error::{CallunaError, Result};

/// Authoritative storage of documents and the sole assigner of IDs.
///
/// An ID is the document's insertion position, so the backing Vec doubles as
/// the ID counter: dense, starting at 0, strictly increasing, never reused.
/// There is no removal path.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: Vec<Document>,
}

impl DocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
        }
    }

    /// Store `document` and return its newly assigned ID.
    pub fn add(&mut self, document: Document) -> DocId {
        self.documents.push(document);
        (self.documents.len() - 1) as DocId
    }

    /// Fetch the document stored under `doc_id`.
    ///
    /// # Errors
    ///
    /// Returns `CallunaError::NotFound` if the ID was never assigned.
    pub fn get(&self, doc_id: DocId) -> Result<&Document> {
        self.documents
            .get(doc_id as usize)
            .ok_or_else(|| CallunaError::not_found(format!("document {doc_id} not found")))
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(title: &str) -> Document {
        Document::new().add_text("title", title)
    }

    #[test]
    fn test_ids_are_dense_and_start_at_zero() {
        let mut store = DocumentStore::new();

        assert_eq!(store.add(doc("first")), 0);
        assert_eq!(store.add(doc("second")), 1);
        assert_eq!(store.add(doc("third")), 2);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_get_returns_the_stored_document() {
        let mut store = DocumentStore::new();
        let id = store.add(doc("hello world"));

        let stored = store.get(id).unwrap();
        assert_eq!(stored.get("title").and_then(|v| v.as_text()), Some("hello world"));
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let store = DocumentStore::new();
        let err = store.get(99).unwrap_err();
        assert!(matches!(err, CallunaError::NotFound(_)));
    }

    #[test]
    fn test_empty_store() {
        let store = DocumentStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
